//! Umbrella crate for the `coin-mold` workspace.
//!
//! Re-exports the raster foundation and the mold pipeline so applications can
//! depend on a single crate.

pub use cm_core::*;
pub use cm_mold::*;
pub use cm_raster::*;
pub use cm_resize::{resize_u8, scale_u8, scaled_dims};
pub use cm_tone::*;
