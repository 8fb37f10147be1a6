use cm_core::{ImageViewMut, Point2i};

/// Draws an 8-connected segment from `a` to `b`, both endpoints included.
pub fn draw_line_segment<T: Copy>(img: &mut ImageViewMut<'_, T>, a: Point2i, b: Point2i, value: T) {
    let dx = (b.x - a.x).abs();
    let dy = -(b.y - a.y).abs();
    let sx = if a.x < b.x { 1 } else { -1 };
    let sy = if a.y < b.y { 1 } else { -1 };

    let (mut x, mut y) = (a.x, a.y);
    let mut err = dx + dy;
    loop {
        img.put_clipped(x, y, value);
        if x == b.x && y == b.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws the four sides of the axis-aligned rectangle spanned by two corners.
pub fn draw_rect_outline<T: Copy>(
    img: &mut ImageViewMut<'_, T>,
    top_left: Point2i,
    bottom_right: Point2i,
    value: T,
) {
    let top_right = Point2i::new(bottom_right.x, top_left.y);
    let bottom_left = Point2i::new(top_left.x, bottom_right.y);

    draw_line_segment(img, top_left, top_right, value);
    draw_line_segment(img, top_left, bottom_left, value);
    draw_line_segment(img, top_right, bottom_right, value);
    draw_line_segment(img, bottom_left, bottom_right, value);
}

#[cfg(test)]
mod tests {
    use cm_core::{Image, Point2i};

    use super::{draw_line_segment, draw_rect_outline};

    #[test]
    fn horizontal_and_vertical_segments_are_exact() {
        let mut img = Image::new_fill(5, 4, 0u8);
        draw_line_segment(&mut img.as_view_mut(), Point2i::new(1, 1), Point2i::new(3, 1), 9);
        draw_line_segment(&mut img.as_view_mut(), Point2i::new(0, 3), Point2i::new(0, 2), 7);

        assert_eq!(
            img.data(),
            &[
                0, 0, 0, 0, 0, //
                0, 9, 9, 9, 0, //
                7, 0, 0, 0, 0, //
                7, 0, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn diagonal_segment_is_symmetric_in_direction() {
        let mut forward = Image::new_fill(6, 6, 0u8);
        let mut backward = Image::new_fill(6, 6, 0u8);
        let a = Point2i::new(0, 1);
        let b = Point2i::new(5, 4);

        draw_line_segment(&mut forward.as_view_mut(), a, b, 1);
        draw_line_segment(&mut backward.as_view_mut(), b, a, 1);

        assert_eq!(forward.get(0, 1), Some(&1));
        assert_eq!(forward.get(5, 4), Some(&1));
        // One pixel per column for a shallow slope.
        for x in 0..6 {
            let column_hits = (0..6).filter(|&y| forward.get(x, y) == Some(&1)).count();
            assert_eq!(column_hits, 1, "column {x}");
        }
        assert_eq!(
            forward.data().iter().filter(|&&v| v == 1).count(),
            backward.data().iter().filter(|&&v| v == 1).count()
        );
    }

    #[test]
    fn segment_outside_view_is_clipped() {
        let mut img = Image::new_fill(3, 3, 0u8);
        draw_line_segment(&mut img.as_view_mut(), Point2i::new(-5, 1), Point2i::new(10, 1), 4);

        assert_eq!(img.data(), &[0, 0, 0, 4, 4, 4, 0, 0, 0]);
    }

    #[test]
    fn rect_outline_leaves_interior_untouched() {
        let mut img = Image::new_fill(5, 5, 255u8);
        draw_rect_outline(&mut img.as_view_mut(), Point2i::new(1, 1), Point2i::new(4, 4), 0);

        for y in 0..5 {
            for x in 0..5 {
                let on_frame = (1..=4).contains(&x)
                    && (1..=4).contains(&y)
                    && (x == 1 || x == 4 || y == 1 || y == 4);
                let expected = if on_frame { 0 } else { 255 };
                assert_eq!(img.get(x, y), Some(&expected), "pixel ({x}, {y})");
            }
        }
    }
}
