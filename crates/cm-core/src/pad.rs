use crate::image::{Image, ImageView};

/// Per-side margin widths, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl Margins {
    /// Size of an image of `(width, height)` once these margins are added.
    pub fn padded_dims(&self, width: usize, height: usize) -> (usize, usize) {
        (
            width + self.left + self.right,
            height + self.top + self.bottom,
        )
    }
}

/// Embeds `src` in a larger image whose margins are all `value`.
///
/// The source lands at `(margins.left, margins.top)`.
pub fn pad_constant<T: Clone>(src: &ImageView<'_, T>, margins: Margins, value: T) -> Image<T> {
    let (out_w, out_h) = margins.padded_dims(src.width(), src.height());
    let mut out = Image::new_fill(out_w, out_h, value);
    if src.width() > 0 && src.height() > 0 {
        out.as_view_mut()
            .copy_from(margins.left, margins.top, src)
            .expect("padded image holds the source");
    }
    out
}
