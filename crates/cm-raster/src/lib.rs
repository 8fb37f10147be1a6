//! Rasterization primitives for mold plates.
//!
//! All functions write a single value into an `ImageViewMut` and silently
//! clip anything that falls outside the view, so shapes may extend past the
//! plate edges.
//!
//! Circle membership is decided on exact squared distances from integer pixel
//! centers:
//! - [`fill_circle`] sets pixels with `dx² + dy² <= r²`.
//! - [`stroke_circle`] sets pixels whose distance from the center lies within
//!   `thickness / 2` of `r`.

mod circle;
mod line;
mod polygon;

pub use circle::{fill_circle, stroke_circle};
pub use line::{draw_line_segment, draw_rect_outline};
pub use polygon::{fill_convex_polygon, stroke_polygon};
