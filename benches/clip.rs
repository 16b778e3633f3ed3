//! Benchmarks for polygon clipping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use clip2d::polygon::Polygon;
use clip2d::sampling::random_simple_polygon;
use clip2d::{clip, Point2};

fn offset_square(offset: f64, size: f64) -> Polygon<f64> {
    Polygon::new(vec![
        Point2::new(offset, offset),
        Point2::new(offset + size, offset),
        Point2::new(offset + size, offset + size),
        Point2::new(offset, offset + size),
    ])
}

fn bench_clip_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_squares");

    let subject = offset_square(0.0, 4.0);

    // Overlapping corner, two crossings
    let overlapping = offset_square(2.0, 4.0);
    group.bench_function("overlapping", |b| {
        b.iter(|| clip(black_box(&subject), black_box(&overlapping)))
    });

    // Bounding boxes disjoint, early exit
    let disjoint = offset_square(10.0, 4.0);
    group.bench_function("disjoint", |b| {
        b.iter(|| clip(black_box(&subject), black_box(&disjoint)))
    });

    // No crossings, containment test path
    let contained = offset_square(1.0, 2.0);
    group.bench_function("contained", |b| {
        b.iter(|| clip(black_box(&subject), black_box(&contained)))
    });

    group.finish();
}

fn bench_clip_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_random");

    // Crossing count grows with vertex count, exercising the full pipeline
    for n in [8, 16, 32, 64] {
        let subject = random_simple_polygon::<f64>(100.0, 100.0, n, 7);
        let clip_region = random_simple_polygon::<f64>(100.0, 100.0, n, 21);

        group.bench_with_input(
            BenchmarkId::new("vertices", n),
            &(subject, clip_region),
            |b, (subject, clip_region)| {
                b.iter(|| clip(black_box(subject), black_box(clip_region)))
            },
        );
    }

    group.finish();
}

fn bench_clip_many_loops(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_many_loops");

    // Comb-shaped subject against a bar: each tooth yields a separate loop
    for teeth in [4, 8, 16] {
        let mut vertices = vec![Point2::new(0.0, 0.0)];
        let tooth_width = 2.0;
        for i in 0..teeth {
            let x = i as f64 * 2.0 * tooth_width;
            vertices.push(Point2::new(x, 10.0));
            vertices.push(Point2::new(x + tooth_width, 10.0));
            vertices.push(Point2::new(x + tooth_width, 0.0));
            vertices.push(Point2::new(x + 2.0 * tooth_width, 0.0));
        }
        vertices.push(Point2::new(teeth as f64 * 2.0 * tooth_width, -2.0));
        vertices.push(Point2::new(0.0, -2.0));
        let comb = Polygon::new(vertices);

        let bar = Polygon::new(vec![
            Point2::new(-1.0, 4.0),
            Point2::new(teeth as f64 * 2.0 * tooth_width + 1.0, 4.0),
            Point2::new(teeth as f64 * 2.0 * tooth_width + 1.0, 6.0),
            Point2::new(-1.0, 6.0),
        ]);

        group.bench_with_input(
            BenchmarkId::new("teeth", teeth),
            &(comb, bar),
            |b, (comb, bar)| b.iter(|| clip(black_box(comb), black_box(bar))),
        );
    }

    group.finish();
}

fn bench_random_polygon_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_polygon");

    for n in [8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("vertices", n), &n, |b, &n| {
            b.iter(|| random_simple_polygon::<f64>(black_box(100.0), black_box(100.0), n, 7))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_clip_squares,
    bench_clip_random,
    bench_clip_many_loops,
    bench_random_polygon_generation
);
criterion_main!(benches);
