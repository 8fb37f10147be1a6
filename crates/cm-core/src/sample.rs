use crate::image::ImageView;

/// Clamps a signed coordinate onto `[0, len)`; `len` must be non-zero.
#[inline]
fn clamp_index(i: i64, len: usize) -> usize {
    i.clamp(0, len as i64 - 1) as usize
}

#[inline]
fn texel<T: Copy>(img: &ImageView<'_, T>, x: i64, y: i64) -> T {
    let cx = clamp_index(x, img.width());
    let cy = clamp_index(y, img.height());
    // SAFETY: both indices were clamped into the non-empty image.
    unsafe { *img.get_unchecked(cx, cy) }
}

/// Value of the pixel whose center is closest to `(x, y)`.
///
/// Coordinates outside the image are clamped onto its edge. Returns `None`
/// only for an empty image.
pub fn sample_nearest<T: Copy>(img: &ImageView<'_, T>, x: f32, y: f32) -> Option<T> {
    if img.width() == 0 || img.height() == 0 {
        return None;
    }
    Some(texel(img, x.round() as i64, y.round() as i64))
}

/// Bilinear blend of the 2x2 neighborhood around `(x, y)` with clamped edges.
pub fn sample_bilinear<T: Copy + Into<f32>>(img: &ImageView<'_, T>, x: f32, y: f32) -> Option<f32> {
    if img.width() == 0 || img.height() == 0 {
        return None;
    }

    let (fx, fy) = (x.floor(), y.floor());
    let (tx, ty) = (x - fx, y - fy);
    let (x0, y0) = (fx as i64, fy as i64);

    let at = |dx: i64, dy: i64| -> f32 { texel(img, x0 + dx, y0 + dy).into() };
    let upper = at(0, 0) + (at(1, 0) - at(0, 0)) * tx;
    let lower = at(0, 1) + (at(1, 1) - at(0, 1)) * tx;
    Some(upper + (lower - upper) * ty)
}

#[cfg(test)]
mod tests {
    use crate::image::Image;
    use crate::sample::{sample_bilinear, sample_nearest};

    fn grid() -> Image<u8> {
        Image::from_vec(3, 3, vec![0u8, 1, 2, 10, 11, 12, 20, 21, 22]).expect("valid image")
    }

    #[test]
    fn nearest_rounds_and_clamps() {
        let img = grid();
        let view = img.as_view();

        assert_eq!(sample_nearest(&view, 1.2, 1.6), Some(21));
        assert_eq!(sample_nearest(&view, 9.0, 9.0), Some(22));
        assert_eq!(sample_nearest(&view, -3.0, 1.0), Some(10));
    }

    #[test]
    fn bilinear_blends_and_clamps() {
        let img = Image::from_vec(2, 2, vec![0u8, 10, 20, 255]).expect("valid image");
        let view = img.as_view();

        assert_eq!(sample_bilinear(&view, 1.0, 1.0), Some(255.0));
        assert_eq!(sample_bilinear(&view, 0.0, 1.0), Some(20.0));
        assert_eq!(sample_bilinear(&view, -0.5, -0.5), Some(0.0));

        let center = sample_bilinear(&view, 0.5, 0.5).expect("non-empty");
        assert!((center - 71.25).abs() < 1e-4);
    }

    #[test]
    fn empty_image_has_no_samples() {
        let img = Image::<u8>::from_vec(0, 0, Vec::new()).expect("empty image");
        let view = img.as_view();
        assert_eq!(sample_nearest(&view, 0.0, 0.0), None);
        assert_eq!(sample_bilinear(&view, 0.0, 0.0), None);
    }
}
