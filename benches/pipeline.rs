//! Benchmarks for the stencil algebras.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::Rgba;

use stencil::effects::Image;
use stencil::types::{Colour, Point};
use stencil::{blur, circle, colour_overlay, difference, in_range, shift, Pipeline};

fn gradient(width: u32, height: u32) -> Image {
    Image::from_fn(width, height, |x, y| {
        Rgba([
            ((x * 2) % 256) as u8,
            ((y * 2) % 256) as u8,
            (((x + y) * 3) % 256) as u8,
            255,
        ])
    })
}

// -- Region benchmarks --

fn bench_region(c: &mut Criterion) {
    let mut group = c.benchmark_group("region");

    group.bench_function("in_range", |b| {
        b.iter(|| {
            in_range(
                black_box(Point::ORIGIN),
                black_box(Point::new(3.0, 3.0)),
                black_box(Point::new(10.0, 10.0)),
                black_box(5.0),
                black_box(1.0),
            )
        })
    });

    // Evaluate a pre-composed region over a grid of points
    let ring = shift(
        Point::new(50.0, 50.0),
        difference(circle(40.0), circle(5.0)),
    );
    let points: Vec<Point> = (0..100)
        .map(|i| Point::new(f64::from(i), f64::from(100 - i)))
        .collect();

    group.bench_function("composed_region_100_points", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| ring.contains(black_box(**p)))
                .count()
        })
    });

    group.finish();
}

// -- Filter benchmarks --

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("filters");

    let small = gradient(64, 64);
    let medium = gradient(128, 128);

    let blur_filter = blur(2.0);
    group.bench_function("blur_64", |b| {
        b.iter(|| blur_filter.apply(black_box(&small)).unwrap())
    });

    let tint = colour_overlay(Colour::new(255, 0, 0, 64));
    group.bench_function("colour_overlay_128", |b| {
        b.iter(|| tint.apply(black_box(&medium)).unwrap())
    });

    let chain = blur(2.0).then(colour_overlay(Colour::new(255, 0, 0, 64)));
    group.bench_function("blur_then_overlay_64", |b| {
        b.iter(|| chain.apply(black_box(&small)).unwrap())
    });

    group.finish();
}

// -- Pipeline benchmarks --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let source = "pipeline:\n  - effect: blur\n    radius: 2.0\n  - effect: colour-overlay\n    colour: \"#FF000040\"\n";
    let small = gradient(32, 32);

    group.bench_function("parse", |b| {
        b.iter(|| Pipeline::parse(black_box(source)).unwrap())
    });

    group.bench_function("parse_build_apply_32", |b| {
        b.iter(|| {
            Pipeline::parse(black_box(source))
                .unwrap()
                .build()
                .unwrap()
                .apply(black_box(&small))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_region, bench_filters, bench_pipeline);
criterion_main!(benches);
