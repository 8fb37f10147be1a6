use cm_core::{ImageViewMut, Point2i};

/// Sets every pixel with `dx² + dy² <= radius²`.
pub fn fill_circle<T: Copy>(img: &mut ImageViewMut<'_, T>, center: Point2i, radius: u32, value: T) {
    let r = radius as i64;
    let r2 = r * r;
    for_each_in_box(img, center, r, |img, x, y, d2| {
        if d2 <= r2 {
            img.put_clipped(x, y, value);
        }
    });
}

/// Sets every pixel whose distance to `center` is within `thickness / 2` of `radius`.
///
/// A thickness of 1 yields a closed one-pixel ring.
pub fn stroke_circle<T: Copy>(
    img: &mut ImageViewMut<'_, T>,
    center: Point2i,
    radius: u32,
    thickness: u32,
    value: T,
) {
    if thickness == 0 {
        return;
    }

    let half = thickness as f64 / 2.0;
    let inner = (radius as f64 - half).max(0.0);
    let outer = radius as f64 + half;
    let (inner2, outer2) = (inner * inner, outer * outer);

    for_each_in_box(img, center, outer.ceil() as i64, |img, x, y, d2| {
        let d2 = d2 as f64;
        if d2 >= inner2 && d2 <= outer2 {
            img.put_clipped(x, y, value);
        }
    });
}

fn for_each_in_box<T>(
    img: &mut ImageViewMut<'_, T>,
    center: Point2i,
    extent: i64,
    mut f: impl FnMut(&mut ImageViewMut<'_, T>, i64, i64, i64),
) {
    let x0 = (center.x - extent).max(0);
    let y0 = (center.y - extent).max(0);
    let x1 = (center.x + extent).min(img.width() as i64 - 1);
    let y1 = (center.y + extent).min(img.height() as i64 - 1);

    for y in y0..=y1 {
        let dy = y - center.y;
        for x in x0..=x1 {
            let dx = x - center.x;
            f(&mut *img, x, y, dx * dx + dy * dy);
        }
    }
}
