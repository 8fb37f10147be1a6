use std::path::{Path, PathBuf};

use cm_core::{Margins, Point2i};
use serde::Serialize;

use crate::io::save_u8_image;
use crate::vents::VentGeometry;
use crate::{CoinAssembly, Mode, MoldError, VentStyle};

/// Files written by [`CoinAssembly::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatePaths {
    pub front: PathBuf,
    pub middle: PathBuf,
    pub back: PathBuf,
}

impl PlatePaths {
    /// `<dir>/<base>Front.png`, `<dir>/<base>Middle.png`, `<dir>/<base>Back.png`.
    pub fn new(dir: &Path, base: &str) -> Self {
        Self {
            front: dir.join(format!("{base}Front.png")),
            middle: dir.join(format!("{base}Middle.png")),
            back: dir.join(format!("{base}Back.png")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblySummary {
    pub plate_width: usize,
    pub plate_height: usize,
    pub diameter: u32,
    pub padding: Margins,
    pub coin_center: Point2i,
    pub vent: VentGeometry,
    pub mode: Mode,
    pub vent_style: VentStyle,
}

impl CoinAssembly {
    pub fn summary(&self) -> AssemblySummary {
        AssemblySummary {
            plate_width: self.front.width(),
            plate_height: self.front.height(),
            diameter: self.diameter,
            padding: self.padding,
            coin_center: self.coin_center,
            vent: self.vent,
            mode: self.mode,
            vent_style: self.vent_style,
        }
    }

    /// Writes the three plates as PNG files into `dir`.
    pub fn save(&self, dir: &Path, base: &str) -> Result<PlatePaths, MoldError> {
        let paths = PlatePaths::new(dir, base);
        save_u8_image(&paths.middle, &self.middle)?;
        save_u8_image(&paths.front, &self.front)?;
        save_u8_image(&paths.back, &self.back)?;
        tracing::info!(dir = %dir.display(), base, "plates written");
        Ok(paths)
    }
}
