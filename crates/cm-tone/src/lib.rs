//! Tonal operations on single-channel `u8` rasters.
//!
//! Binary outputs use `0` and `255`. Otsu's level `t` splits samples into
//! `[0, t]` and `(t, 255]`; [`threshold_binary`] maps the upper class to `255`.

use cm_core::{Error, Image, ImageView};

pub fn invert_u8(src: &ImageView<'_, u8>) -> Image<u8> {
    let mut out = src.to_image();
    for v in out.data_mut() {
        *v = 255 - *v;
    }
    out
}

pub fn histogram_u8(src: &ImageView<'_, u8>) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for y in 0..src.height() {
        for &v in src.row(y) {
            hist[v as usize] += 1;
        }
    }
    hist
}

/// Otsu's threshold: the level maximizing between-class variance.
///
/// Ties resolve to the lowest level, so a constant image yields `0`.
pub fn otsu_level(src: &ImageView<'_, u8>) -> u8 {
    let hist = histogram_u8(src);
    let total: u64 = hist.iter().sum();
    if total == 0 {
        return 0;
    }

    let total_f = total as f64;
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let mut best_level = 0u8;
    let mut best_var = -1.0f64;
    let mut weight_bg = 0u64;
    let mut sum_bg = 0.0f64;

    for (level, &count) in hist.iter().enumerate() {
        weight_bg += count;
        sum_bg += level as f64 * count as f64;

        let weight_fg = total - weight_bg;
        let var = if weight_bg == 0 || weight_fg == 0 {
            0.0
        } else {
            let w_bg = weight_bg as f64 / total_f;
            let w_fg = weight_fg as f64 / total_f;
            let mean_bg = sum_bg / weight_bg as f64;
            let mean_fg = (sum_all - sum_bg) / weight_fg as f64;
            w_bg * w_fg * (mean_bg - mean_fg) * (mean_bg - mean_fg)
        };

        if var > best_var {
            best_var = var;
            best_level = level as u8;
        }
    }

    best_level
}

pub fn threshold_binary(src: &ImageView<'_, u8>, level: u8) -> Image<u8> {
    let mut out = src.to_image();
    for v in out.data_mut() {
        *v = if *v > level { 255 } else { 0 };
    }
    out
}

/// Thresholds at [`otsu_level`] and returns the binary image with the level used.
pub fn threshold_otsu(src: &ImageView<'_, u8>) -> (Image<u8>, u8) {
    let level = otsu_level(src);
    (threshold_binary(src, level), level)
}

/// Per-pixel `a + b`, clamped at 255.
pub fn saturating_add(a: &Image<u8>, b: &Image<u8>) -> Result<Image<u8>, Error> {
    a.zip_map(b, |&x, &y| x.saturating_add(y))
}
