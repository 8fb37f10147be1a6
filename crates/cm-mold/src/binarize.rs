use cm_core::{Image, ImageView};
use cm_tone::{invert_u8, threshold_otsu};

/// Turns a grayscale design into a working plate where ink becomes material.
///
/// The design is inverted so dark ink maps to high values. With
/// `no_dithering` the result is collapsed to `{0, 255}` at Otsu's level;
/// otherwise the inverted grayscale is kept as is.
pub fn binarize(src: &ImageView<'_, u8>, no_dithering: bool) -> Image<u8> {
    let inverted = invert_u8(src);
    if !no_dithering {
        return inverted;
    }

    let (binary, level) = threshold_otsu(&inverted.as_view());
    tracing::debug!(level, "otsu threshold applied");
    binary
}
