//! Foundational raster primitives for coin mold generation.
//!
//! ## Images and Views
//! `Image<T>` owns a contiguous row-major buffer. `ImageView` and
//! `ImageViewMut` borrow a buffer with an element stride (not byte stride),
//! which may exceed `width`, so stages can operate on subregions of a larger
//! plate without copying.
//!
//! ## Value Convention
//! Mold rasters are single-channel `u8`. `255` denotes solid mold material and
//! `0` denotes a cut or ink line.
//!
//! ## Padding and Sampling
//! [`pad_constant`] surrounds a raster with uniform margins. Sampling always
//! clamps onto the nearest edge pixel.
//!
//! ## Coordinates
//! Integer coordinates refer to pixel centers. Nearest-neighbor sampling
//! rounds to the nearest index; bilinear uses the floor-based 2x2
//! neighborhood.

mod error;
mod geom;
mod image;
mod pad;
mod sample;

pub use error::Error;
pub use geom::{Point2i, Vec2i};
pub use image::{Image, ImageView, ImageViewMut};
pub use pad::{Margins, pad_constant};
pub use sample::{sample_bilinear, sample_nearest};
