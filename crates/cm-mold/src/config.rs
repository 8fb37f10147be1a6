use cm_resize::Interpolation;
use serde::{Deserialize, Serialize};

use crate::MoldError;

/// Shape of the pour channel cut into the middle plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentStyle {
    /// Narrow funnel from a chord on the plate's top edge down to the coin.
    #[default]
    TopConverging,
    /// Wide funnel spanning the design's full width at the top edge.
    SideConverging,
}

/// Whether the plates come from two designs or from one reused for both faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    DualImage,
    SingleImageMirrored,
}

/// Parameters of one coin mold invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoldConfig {
    /// Uniform resize factor applied to each design before masking.
    pub scale: f64,
    /// Coin radius in pixels, kept under the name `diameter` used by the CLI.
    /// Derived from the scaled design when `None`.
    pub diameter: Option<u32>,
    /// Collapse the inverted design to pure black/white with Otsu's method.
    /// When unset the design is assumed to be dithered already.
    pub no_dithering: bool,
    pub vent_style: VentStyle,
    pub interpolation: Interpolation,
}

impl Default for MoldConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            diameter: None,
            no_dithering: false,
            vent_style: VentStyle::default(),
            interpolation: Interpolation::default(),
        }
    }
}

impl MoldConfig {
    /// Checks the parameters that can be rejected before any image is read.
    pub fn validate(&self) -> Result<(), MoldError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(MoldError::invalid(format!(
                "scale factor must be a positive finite number, got {}",
                self.scale
            )));
        }
        if self.diameter == Some(0) {
            return Err(MoldError::invalid("diameter must be at least 1 pixel"));
        }
        Ok(())
    }
}
