use cm_core::{Image, Point2i};
use cm_raster::draw_rect_outline;

/// Stamps the 1 px registration frame (0) used to align the plates.
///
/// The frame runs along rows `1` and `height - 1` and columns `1` and
/// `width - 1`.
pub fn draw_border(mut img: Image<u8>) -> Image<u8> {
    let (w, h) = img.dims();
    if w == 0 || h == 0 {
        return img;
    }

    draw_rect_outline(
        &mut img.as_view_mut(),
        Point2i::new(1, 1),
        Point2i::new(w as i64 - 1, h as i64 - 1),
        0,
    );
    img
}
