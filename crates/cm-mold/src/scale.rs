use cm_core::Image;
use cm_resize::{Interpolation, scale_u8};

use crate::MoldError;

/// Resizes a working plate by `factor`, truncating each dimension.
pub fn scale(img: Image<u8>, factor: f64, interpolation: Interpolation) -> Result<Image<u8>, MoldError> {
    if factor == 1.0 {
        return Ok(img);
    }

    let out = scale_u8(&img.as_view(), factor, interpolation).ok_or_else(|| {
        MoldError::invalid(format!(
            "scale factor must be a positive finite number, got {factor}"
        ))
    })?;

    if out.is_empty() {
        return Err(MoldError::invalid(format!(
            "scale factor {factor} shrinks a {}x{} design to nothing",
            img.width(),
            img.height()
        )));
    }

    tracing::debug!(
        from_w = img.width(),
        from_h = img.height(),
        to_w = out.width(),
        to_h = out.height(),
        "scaled design"
    );
    Ok(out)
}
