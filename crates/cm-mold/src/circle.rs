use cm_core::{Image, Point2i};
use cm_raster::{fill_circle, stroke_circle};

use crate::MoldError;

/// Width of the cut line marking the coin edge on the face plates.
pub const COIN_OUTLINE_THICKNESS: u32 = 3;

/// Center used for the coin footprint of an unpadded plate.
pub fn plate_center(width: usize, height: usize) -> Point2i {
    Point2i::new((width / 2) as i64, (height / 2) as i64)
}

/// Clips a working plate to the circular coin footprint.
///
/// Pixels farther than `radius` from the plate center become material (255),
/// pixels inside keep their value, and a 3 px outline centered on `radius`
/// is cut (0) where it falls inside the footprint.
pub fn add_circle(img: &Image<u8>, radius: u32) -> Result<Image<u8>, MoldError> {
    let (w, h) = img.dims();
    let center = plate_center(w, h);

    let mut outlined = img.clone();
    stroke_circle(
        &mut outlined.as_view_mut(),
        center,
        radius,
        COIN_OUTLINE_THICKNESS,
        0,
    );

    let mut inside = Image::new_fill(w, h, 0u8);
    fill_circle(&mut inside.as_view_mut(), center, radius, 1);

    let masked = outlined.zip_map(&inside, |&v, &m| if m == 1 { v } else { 255 })?;
    tracing::debug!(w, h, radius, "coin footprint applied");
    Ok(masked)
}
