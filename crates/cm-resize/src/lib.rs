//! Resampling of `u8` rasters by an arbitrary factor.
//!
//! Destination pixel `(x, y)` samples the source at
//! `((x + 0.5) / sx - 0.5, (y + 0.5) / sy - 0.5)` with clamped borders, so a
//! factor of exactly `1.0` reproduces the source bit for bit with either
//! interpolation.

use cm_core::{Image, ImageView, sample_bilinear, sample_nearest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Interpolation {
    Nearest,
    #[default]
    Bilinear,
}

/// Output size for a uniform scale factor; each dimension is truncated.
///
/// Returns `None` for a non-finite or non-positive factor.
pub fn scaled_dims(width: usize, height: usize, factor: f64) -> Option<(usize, usize)> {
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }
    Some((
        (width as f64 * factor) as usize,
        (height as f64 * factor) as usize,
    ))
}

pub fn resize_u8(
    src: &ImageView<'_, u8>,
    width: usize,
    height: usize,
    interpolation: Interpolation,
) -> Image<u8> {
    if width == src.width() && height == src.height() {
        return src.to_image();
    }
    if width == 0 || height == 0 || src.width() == 0 || src.height() == 0 {
        return Image::new_fill(width, height, 0u8);
    }

    let sx = width as f32 / src.width() as f32;
    let sy = height as f32 / src.height() as f32;

    Image::from_fn(width, height, |x, y| {
        let fx = (x as f32 + 0.5) / sx - 0.5;
        let fy = (y as f32 + 0.5) / sy - 0.5;
        match interpolation {
            Interpolation::Nearest => sample_nearest(src, fx, fy).unwrap_or_default(),
            Interpolation::Bilinear => sample_bilinear(src, fx, fy)
                .map_or(0, |v| v.round().clamp(0.0, 255.0) as u8),
        }
    })
}

/// Scales both dimensions by `factor`; `None` when the factor is invalid.
pub fn scale_u8(
    src: &ImageView<'_, u8>,
    factor: f64,
    interpolation: Interpolation,
) -> Option<Image<u8>> {
    let (width, height) = scaled_dims(src.width(), src.height(), factor)?;
    Some(resize_u8(src, width, height, interpolation))
}
