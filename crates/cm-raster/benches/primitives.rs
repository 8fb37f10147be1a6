use criterion::{Criterion, black_box, criterion_group, criterion_main};
use cm_core::{Image, Point2i};
use cm_raster::{fill_circle, fill_convex_polygon, stroke_circle};

fn bench_circles(c: &mut Criterion) {
    let mut img = Image::new_fill(1024, 1024, 0u8);
    let center = Point2i::new(512, 512);

    c.bench_function("fill_circle_r400_1024x1024", |b| {
        b.iter(|| {
            fill_circle(&mut img.as_view_mut(), black_box(center), black_box(400), 255);
        });
    });

    c.bench_function("stroke_circle_r400_t3_1024x1024", |b| {
        b.iter(|| {
            stroke_circle(&mut img.as_view_mut(), black_box(center), black_box(400), 3, 0);
        });
    });
}

fn bench_triangle(c: &mut Criterion) {
    let mut img = Image::new_fill(1024, 1024, 0u8);
    let tri = [
        Point2i::new(358, 1),
        Point2i::new(512, 700),
        Point2i::new(665, 1),
    ];

    c.bench_function("fill_convex_triangle_1024x1024", |b| {
        b.iter(|| {
            fill_convex_polygon(&mut img.as_view_mut(), black_box(&tri), 0);
        });
    });
}

criterion_group!(benches, bench_circles, bench_triangle);
criterion_main!(benches);
