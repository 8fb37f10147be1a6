//! Pour channel construction for the middle plate.
//!
//! The vent layer starts empty (0) and is built in four passes:
//! 1. a 1 px ring (255) at the coin radius around the coin center,
//! 2. the vent triangle filled with 0, clearing the ring under the wedge,
//! 3. the triangle edges stroked with 255,
//! 4. the coin interior (radius - 1) filled with 0.
//!
//! What survives is the coin boundary outside the wedge plus the wedge walls
//! running from the plate edge down to the coin. The ring from pass 1 alone is
//! also overlaid onto each face plate.

use cm_core::{Image, Margins, Point2i};
use cm_raster::{fill_circle, fill_convex_polygon, stroke_circle, stroke_polygon};
use cm_tone::saturating_add;
use serde::Serialize;

use crate::{MoldError, VentStyle};

/// Isosceles pour-channel triangle; the apex sits on the coin center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VentGeometry {
    pub apex: Point2i,
    pub base_left: Point2i,
    pub base_right: Point2i,
}

impl VentGeometry {
    /// Triangle for `style` on a padded plate.
    ///
    /// `original` is the plate size before padding.
    pub fn for_style(
        style: VentStyle,
        padded: (usize, usize),
        original: (usize, usize),
        margins: Margins,
    ) -> Self {
        let apex = coin_center(padded.0, original.1, margins);
        let (base_left, base_right) = match style {
            VentStyle::TopConverging => {
                let w = padded.0 as i64;
                (Point2i::new(w * 35 / 100, 1), Point2i::new(w * 65 / 100, 1))
            }
            VentStyle::SideConverging => {
                let left = margins.left as i64;
                let right = left + original.0 as i64 - 1;
                (Point2i::new(left, 1), Point2i::new(right, 1))
            }
        };

        Self {
            apex,
            base_left,
            base_right,
        }
    }

    pub fn vertices(&self) -> [Point2i; 3] {
        [self.base_left, self.apex, self.base_right]
    }
}

/// Coin center inside the padded plate: horizontally centered, vertically
/// offset by the top margin plus half the original height.
pub fn coin_center(padded_width: usize, original_height: usize, margins: Margins) -> Point2i {
    Point2i::new(
        (padded_width / 2) as i64,
        (margins.top + original_height / 2) as i64,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct VentLayers {
    /// Coin boundary ring only, overlaid onto the face plates.
    pub ring: Image<u8>,
    /// Finished vent layer for the middle plate, before framing and inversion.
    pub vent: Image<u8>,
    pub coin_center: Point2i,
    pub geometry: VentGeometry,
}

pub fn build_vents(
    padded: (usize, usize),
    original: (usize, usize),
    margins: Margins,
    radius: u32,
    style: VentStyle,
) -> VentLayers {
    let geometry = VentGeometry::for_style(style, padded, original, margins);
    let center = geometry.apex;

    let mut ring = Image::new_fill(padded.0, padded.1, 0u8);
    stroke_circle(&mut ring.as_view_mut(), center, radius, 1, 255);

    let mut vent = ring.clone();
    {
        let mut view = vent.as_view_mut();
        let tri = geometry.vertices();
        fill_convex_polygon(&mut view, &tri, 0);
        stroke_polygon(&mut view, &tri, 255);
        fill_circle(&mut view, center, radius.saturating_sub(1), 0);
    }

    tracing::debug!(
        ?style,
        cx = center.x,
        cy = center.y,
        radius,
        "vent layer built"
    );

    VentLayers {
        ring,
        vent,
        coin_center: center,
        geometry,
    }
}

/// Adds the coin boundary ring onto a face plate, saturating at 255.
pub fn overlay_ring(face: &Image<u8>, ring: &Image<u8>) -> Result<Image<u8>, MoldError> {
    Ok(saturating_add(face, ring)?)
}

#[cfg(test)]
mod tests {
    use cm_core::{Image, Margins, Point2i};

    use super::{VentGeometry, build_vents, coin_center, overlay_ring};
    use crate::VentStyle;

    fn square_margins() -> Margins {
        Margins {
            top: 55,
            bottom: 15,
            left: 15,
            right: 15,
        }
    }

    fn dist2(x: usize, y: usize, c: Point2i) -> i64 {
        let dx = x as i64 - c.x;
        let dy = y as i64 - c.y;
        dx * dx + dy * dy
    }

    #[test]
    fn coin_center_accounts_for_top_margin() {
        let c = coin_center(130, 100, square_margins());
        assert_eq!(c, Point2i::new(65, 105));
    }

    #[test]
    fn top_converging_base_is_a_chord_on_row_one() {
        let g = VentGeometry::for_style(
            VentStyle::TopConverging,
            (130, 170),
            (100, 100),
            square_margins(),
        );
        assert_eq!(g.base_left, Point2i::new(45, 1));
        assert_eq!(g.base_right, Point2i::new(84, 1));
        assert_eq!(g.apex, Point2i::new(65, 105));
    }

    #[test]
    fn side_converging_base_spans_original_width() {
        let margins = Margins {
            top: 25,
            ..Margins::default()
        };
        let g = VentGeometry::for_style(VentStyle::SideConverging, (100, 125), (100, 100), margins);
        assert_eq!(g.base_left, Point2i::new(0, 1));
        assert_eq!(g.base_right, Point2i::new(99, 1));
        assert_eq!(g.apex, Point2i::new(50, 75));
    }

    #[test]
    fn coin_interior_is_clear_for_every_style() {
        let cases = [
            (VentStyle::TopConverging, (130, 170), square_margins()),
            (
                VentStyle::SideConverging,
                (100, 125),
                Margins {
                    top: 25,
                    ..Margins::default()
                },
            ),
        ];

        for (style, padded, margins) in cases {
            let radius = 40u32;
            let layers = build_vents(padded, (100, 100), margins, radius, style);
            let c = layers.coin_center;
            let inner = (radius as i64 - 1) * (radius as i64 - 1);

            for y in 0..padded.1 {
                for x in 0..padded.0 {
                    if dist2(x, y, c) <= inner {
                        assert_eq!(layers.vent.get(x, y), Some(&0), "{style:?} ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn vent_keeps_ring_outside_wedge_and_wedge_walls() {
        let layers = build_vents(
            (130, 170),
            (100, 100),
            square_margins(),
            40,
            VentStyle::TopConverging,
        );
        let c = layers.coin_center;

        // Ring below the coin center is far from the wedge.
        assert_eq!(layers.vent.get(c.x as usize, (c.y + 40) as usize), Some(&255));
        // Ring directly above the center lies inside the wedge and is cleared.
        assert_eq!(layers.vent.get(c.x as usize, (c.y - 40) as usize), Some(&0));
        // The wedge's top edge survives.
        assert_eq!(layers.vent.get(60, 1), Some(&255));
        // Between the walls, above the coin, the channel is open.
        assert_eq!(layers.vent.get(c.x as usize, 30), Some(&0));
        // The ring layer keeps the full circle.
        assert_eq!(layers.ring.get(c.x as usize, (c.y - 40) as usize), Some(&255));
        assert!(layers.ring.data().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn ring_overlay_saturates() {
        let face = Image::from_vec(3, 1, vec![0u8, 200, 255]).expect("valid image");
        let ring = Image::from_vec(3, 1, vec![255u8, 255, 0]).expect("valid image");
        let out = overlay_ring(&face, &ring).expect("same dims");
        assert_eq!(out.data(), &[255, 255, 255]);
    }
}
