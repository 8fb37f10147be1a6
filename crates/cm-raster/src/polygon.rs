use cm_core::{ImageViewMut, Point2i};

use crate::line::draw_line_segment;

/// Fills a convex polygon, boundary included.
///
/// Vertices may be given in either winding order. Collinear input degenerates
/// to the pixels lying exactly on the shared line.
pub fn fill_convex_polygon<T: Copy>(img: &mut ImageViewMut<'_, T>, vertices: &[Point2i], value: T) {
    match vertices {
        [] => return,
        [p] => {
            img.put_clipped(p.x, p.y, value);
            return;
        }
        [a, b] => {
            draw_line_segment(img, *a, *b, value);
            return;
        }
        _ => {}
    }

    if img.width() == 0 || img.height() == 0 {
        return;
    }

    let min_x = vertices.iter().map(|p| p.x).min().unwrap_or(0).max(0);
    let max_x = vertices
        .iter()
        .map(|p| p.x)
        .max()
        .unwrap_or(0)
        .min(img.width() as i64 - 1);
    let min_y = vertices.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = vertices
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(0)
        .min(img.height() as i64 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if contains(vertices, Point2i::new(x, y)) {
                img.put_clipped(x, y, value);
            }
        }
    }
}

/// Draws the closed outline through `vertices`.
pub fn stroke_polygon<T: Copy>(img: &mut ImageViewMut<'_, T>, vertices: &[Point2i], value: T) {
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        draw_line_segment(img, a, b, value);
    }
}

fn contains(vertices: &[Point2i], p: Point2i) -> bool {
    let mut has_pos = false;
    let mut has_neg = false;
    for (i, &a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        let side = (b - a).cross(p - a);
        has_pos |= side > 0;
        has_neg |= side < 0;
        if has_pos && has_neg {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use cm_core::{Image, Point2i};

    use super::{fill_convex_polygon, stroke_polygon};

    #[test]
    fn triangle_fill_is_winding_independent() {
        let tri = [Point2i::new(1, 1), Point2i::new(8, 1), Point2i::new(1, 8)];
        let rev = [tri[2], tri[1], tri[0]];

        let mut a = Image::new_fill(10, 10, 0u8);
        let mut b = Image::new_fill(10, 10, 0u8);
        fill_convex_polygon(&mut a.as_view_mut(), &tri, 1);
        fill_convex_polygon(&mut b.as_view_mut(), &rev, 1);

        assert_eq!(a, b);
        assert_eq!(a.get(1, 1), Some(&1));
        assert_eq!(a.get(4, 4), Some(&1));
        assert_eq!(a.get(8, 8), Some(&0));
        // x + y <= 9 inside the half-plane of the hypotenuse.
        let filled = a.data().iter().filter(|&&v| v == 1).count();
        assert_eq!(filled, (1..=8).sum::<usize>());
    }

    #[test]
    fn fill_clips_vertices_outside_view() {
        let mut img = Image::new_fill(4, 4, 0u8);
        let quad = [
            Point2i::new(-10, -10),
            Point2i::new(10, -10),
            Point2i::new(10, 10),
            Point2i::new(-10, 10),
        ];
        fill_convex_polygon(&mut img.as_view_mut(), &quad, 3);
        assert!(img.data().iter().all(|&v| v == 3));
    }

    #[test]
    fn collinear_vertices_fill_only_the_line() {
        let mut img = Image::new_fill(6, 3, 0u8);
        let flat = [Point2i::new(0, 1), Point2i::new(2, 1), Point2i::new(5, 1)];
        fill_convex_polygon(&mut img.as_view_mut(), &flat, 1);

        assert_eq!(img.data().iter().filter(|&&v| v == 1).count(), 6);
        assert!((0..6).all(|x| img.get(x, 1) == Some(&1)));
    }

    #[test]
    fn stroke_closes_the_outline() {
        let mut img = Image::new_fill(5, 5, 0u8);
        let square = [
            Point2i::new(0, 0),
            Point2i::new(4, 0),
            Point2i::new(4, 4),
            Point2i::new(0, 4),
        ];
        stroke_polygon(&mut img.as_view_mut(), &square, 1);

        assert_eq!(img.data().iter().filter(|&&v| v == 1).count(), 16);
        assert_eq!(img.get(2, 2), Some(&0));
        assert_eq!(img.get(0, 2), Some(&1));
    }
}
