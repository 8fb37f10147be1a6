use std::path::Path;

use cm_core::Image;
use image::GrayImage;

use crate::MoldError;

/// Decodes `path` and converts it to 8-bit luma.
pub fn load_grayscale(path: &Path) -> Result<Image<u8>, MoldError> {
    if !path.is_file() {
        return Err(MoldError::NotFound {
            path: path.to_path_buf(),
            source: None,
        });
    }

    let dyn_img = image::open(path).map_err(|e| MoldError::NotFound {
        path: path.to_path_buf(),
        source: Some(e),
    })?;
    let luma = dyn_img.to_luma8();
    let (w, h) = luma.dimensions();

    Ok(Image::from_vec(w as usize, h as usize, luma.into_raw())?)
}

/// Encodes `img` as grayscale; the format follows the file extension.
pub fn save_u8_image(path: &Path, img: &Image<u8>) -> Result<(), MoldError> {
    let gray = GrayImage::from_raw(img.width() as u32, img.height() as u32, img.data().to_vec())
        .ok_or(cm_core::Error::SizeMismatch {
            expected: img.width() * img.height(),
            actual: img.data().len(),
        })?;

    gray.save(path).map_err(|source| MoldError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
