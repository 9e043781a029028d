//! Benchmarks for colour conversion and tree randomization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use recolour::{
    randomize_selection, rgb_to_hsl, Colour, ColourRandomizer, CompoundShape, GraphicalObject,
    Group, RngSource, SimpleShape, Strengths,
};

// -- Conversion benchmarks --

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| rgb_to_hsl(black_box(Colour::rgb(200, 50, 50))))
    });

    group.bench_function("round_trip", |b| {
        b.iter(|| rgb_to_hsl(black_box(Colour::rgb(30, 144, 255))).to_rgb())
    });

    let mut randomizer = ColourRandomizer::new(Strengths::default(), RngSource::seeded(1));
    group.bench_function("randomize_colour", |b| {
        b.iter(|| randomizer.randomize_colour(black_box(Colour::rgb(200, 50, 50))))
    });

    group.finish();
}

// -- Traversal benchmarks --

/// A group tree `depth` levels deep, `width` items per level, with a
/// compound shape of four paths at each leaf position.
fn build_tree(depth: usize, width: usize) -> GraphicalObject {
    if depth == 0 {
        let path = SimpleShape::filled(Colour::rgb(120, 80, 200)).with_stroke(Colour::BLACK);
        return CompoundShape::new(vec![path; 4]).into();
    }
    Group::new((0..width).map(|_| build_tree(depth - 1, width)).collect()).into()
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    let flat: Vec<GraphicalObject> = (0..1000)
        .map(|i| SimpleShape::filled(Colour::rgb(i as u8, 100, 200)).into())
        .collect();

    group.bench_function("flat_1000", |b| {
        b.iter_batched(
            || flat.clone(),
            |mut selection| {
                randomize_selection(&mut selection, Strengths::default(), RngSource::seeded(7))
            },
            criterion::BatchSize::SmallInput,
        )
    });

    let nested = vec![build_tree(4, 4)];

    group.bench_function("nested_4x4", |b| {
        b.iter_batched(
            || nested.clone(),
            |mut selection| {
                randomize_selection(&mut selection, Strengths::default(), RngSource::seeded(7))
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_traversal);
criterion_main!(benches);
