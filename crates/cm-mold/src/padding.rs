//! Margins around the coin footprint.
//!
//! Margins are derived from the plate size at the moment padding is applied,
//! as truncated integer percentages:
//!
//! | style            | top       | bottom    | left / right |
//! |------------------|-----------|-----------|--------------|
//! | top-converging   | 55% width | 15% width | 15% height   |
//! | side-converging  | 25% width | 0         | 0            |
//!
//! The heavy top margin leaves room above the coin for the pour channel.

use cm_core::{Image, Margins, pad_constant};

use crate::VentStyle;

#[derive(Debug, Clone, PartialEq)]
pub struct Padded {
    pub image: Image<u8>,
    pub margins: Margins,
}

fn percent(value: usize, pct: usize) -> usize {
    value * pct / 100
}

pub fn margins_for(style: VentStyle, width: usize, height: usize) -> Margins {
    match style {
        VentStyle::TopConverging => Margins {
            top: percent(width, 55),
            bottom: percent(width, 15),
            left: percent(height, 15),
            right: percent(height, 15),
        },
        VentStyle::SideConverging => Margins {
            top: percent(width, 25),
            ..Margins::default()
        },
    }
}

/// Embeds `img` in a larger plate whose margins are solid material (255).
pub fn add_padding(img: &Image<u8>, style: VentStyle) -> Padded {
    let margins = margins_for(style, img.width(), img.height());
    let image = pad_constant(&img.as_view(), margins, 255u8);
    tracing::debug!(
        top = margins.top,
        bottom = margins.bottom,
        side = margins.left,
        w = image.width(),
        h = image.height(),
        "padded plate"
    );
    Padded { image, margins }
}
