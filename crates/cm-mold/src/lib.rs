//! Coin mold generation.
//!
//! Converts one or two grayscale coin designs into a three-plate casting kit:
//! a front plate, a back plate and a middle plate carrying the pour channel.
//!
//! ## Pipeline
//! Each design goes through the same stages, then the pair is assembled:
//!
//! ```text
//! binarize -> scale -> add_circle -> add_padding   (per face)
//!                                        |
//!                              build_vents / overlay_ring
//!                                        |
//!                         draw_border -> compose -> CoinAssembly
//! ```
//!
//! All stages are pure: each takes its input by reference or by value and
//! returns a new raster. [`make_coin`] is the entry point for decoded images,
//! [`make_coin_from_paths`] loads designs from disk first.
//!
//! ## Values
//! `255` is solid mold material and `0` is a cut line. The middle plate is
//! inverted at the end, so its channel walls are `0` on a `255` background.

mod assembly;
mod binarize;
mod circle;
mod composite;
mod config;
mod error;
mod frame;
mod io;
mod padding;
mod pipeline;
mod scale;
mod vents;

pub use assembly::{AssemblySummary, PlatePaths};
pub use binarize::binarize;
pub use circle::{COIN_OUTLINE_THICKNESS, add_circle, plate_center};
pub use composite::{Plates, compose};
pub use config::{Mode, MoldConfig, VentStyle};
pub use error::MoldError;
pub use frame::draw_border;
pub use io::{load_grayscale, save_u8_image};
pub use padding::{Padded, add_padding, margins_for};
pub use pipeline::{CoinAssembly, CoinSources, default_diameter, make_coin, make_coin_from_paths};
pub use scale::scale;
pub use vents::{VentGeometry, VentLayers, build_vents, coin_center, overlay_ring};

pub use cm_core::{Image, Margins, Point2i};
pub use cm_resize::Interpolation;
