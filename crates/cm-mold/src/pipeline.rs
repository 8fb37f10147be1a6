use std::path::Path;

use cm_core::{Image, Margins, Point2i};

use crate::binarize::binarize;
use crate::circle::add_circle;
use crate::composite::compose;
use crate::frame::draw_border;
use crate::io::load_grayscale;
use crate::padding::{Padded, add_padding};
use crate::scale::scale;
use crate::vents::{VentGeometry, build_vents, overlay_ring};
use crate::{Mode, MoldConfig, MoldError, VentStyle};

/// Decoded grayscale designs entering the pipeline.
#[derive(Debug, Clone)]
pub enum CoinSources {
    Dual { front: Image<u8>, back: Image<u8> },
    /// One design reused for both faces.
    Single(Image<u8>),
}

impl CoinSources {
    pub fn mode(&self) -> Mode {
        match self {
            Self::Dual { .. } => Mode::DualImage,
            Self::Single(_) => Mode::SingleImageMirrored,
        }
    }
}

/// The three mold plates and the geometry used to produce them.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinAssembly {
    pub front: Image<u8>,
    pub back: Image<u8>,
    pub middle: Image<u8>,
    /// Coin radius in pixels.
    pub diameter: u32,
    pub padding: Margins,
    pub coin_center: Point2i,
    pub vent: VentGeometry,
    pub mode: Mode,
    pub vent_style: VentStyle,
}

/// Coin radius used when none is configured: half the smaller dimension.
pub fn default_diameter(width: usize, height: usize) -> usize {
    (width / 2).min(height / 2)
}

fn resolve_diameter(requested: Option<u32>, width: usize, height: usize) -> Result<u32, MoldError> {
    let limit = default_diameter(width, height);
    let diameter = match requested {
        Some(d) => d as usize,
        None => limit,
    };

    if diameter == 0 {
        return Err(MoldError::invalid(format!(
            "a {width}x{height} design is too small for a coin footprint"
        )));
    }
    if diameter > limit {
        return Err(MoldError::invalid(format!(
            "diameter {diameter} exceeds half the smaller dimension of the {width}x{height} design ({limit})"
        )));
    }

    u32::try_from(diameter)
        .map_err(|_| MoldError::invalid(format!("diameter {diameter} is out of range")))
}

fn prepare_face(src: &Image<u8>, config: &MoldConfig) -> Result<Image<u8>, MoldError> {
    let working = binarize(&src.as_view(), config.no_dithering);
    scale(working, config.scale, config.interpolation)
}

fn shape_face(face: &Image<u8>, diameter: u32, style: VentStyle) -> Result<Padded, MoldError> {
    let clipped = add_circle(face, diameter)?;
    Ok(add_padding(&clipped, style))
}

fn finish_face(padded: &Image<u8>, ring: &Image<u8>) -> Result<Image<u8>, MoldError> {
    Ok(draw_border(overlay_ring(padded, ring)?))
}

/// Runs the full mold pipeline over decoded designs.
///
/// Either all three plates are produced or an error is returned.
pub fn make_coin(sources: CoinSources, config: &MoldConfig) -> Result<CoinAssembly, MoldError> {
    config.validate()?;
    let mode = sources.mode();

    let (front, back) = match &sources {
        CoinSources::Dual { front, back } => {
            let front = prepare_face(front, config)?;
            let back = prepare_face(back, config)?;
            if front.dims() != back.dims() {
                return Err(MoldError::DimensionMismatch {
                    front: front.dims(),
                    back: back.dims(),
                });
            }
            (front, Some(back))
        }
        CoinSources::Single(image) => (prepare_face(image, config)?, None),
    };

    let original = front.dims();
    let diameter = resolve_diameter(config.diameter, original.0, original.1)?;
    let style = config.vent_style;

    let front = shape_face(&front, diameter, style)?;
    let back = back
        .map(|b| shape_face(&b, diameter, style))
        .transpose()?;

    let padding = front.margins;
    let layers = build_vents(front.image.dims(), original, padding, diameter, style);

    let front_face = finish_face(&front.image, &layers.ring)?;
    let back_face = match back {
        Some(b) => finish_face(&b.image, &layers.ring)?,
        None => front_face.clone(),
    };
    let vent = draw_border(layers.vent);

    let plates = compose(&front_face, &back_face, &vent);

    tracing::info!(
        ?mode,
        ?style,
        diameter,
        width = plates.front.width(),
        height = plates.front.height(),
        "coin mold assembled"
    );

    Ok(CoinAssembly {
        front: plates.front,
        back: plates.back,
        middle: plates.middle,
        diameter,
        padding,
        coin_center: layers.coin_center,
        vent: layers.geometry,
        mode,
        vent_style: style,
    })
}

/// Loads the designs from disk and runs [`make_coin`].
///
/// Without a back path the front design is reused for both faces.
pub fn make_coin_from_paths(
    front: &Path,
    back: Option<&Path>,
    config: &MoldConfig,
) -> Result<CoinAssembly, MoldError> {
    config.validate()?;

    let front_img = load_grayscale(front)?;
    let sources = match back {
        Some(path) => CoinSources::Dual {
            front: front_img,
            back: load_grayscale(path)?,
        },
        None => CoinSources::Single(front_img),
    };

    make_coin(sources, config)
}
