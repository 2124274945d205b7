//! Benchmarks for launch image generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use launchgen::types::{BACKGROUNDS, LOGOS};
use launchgen::{generate_background, generate_logo};

fn bench_backgrounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("background");

    for asset in BACKGROUNDS {
        group.bench_function(asset.filename, |b| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| generate_background(black_box(asset.width), black_box(asset.height), &mut rng).unwrap())
        });
    }

    group.finish();
}

fn bench_logos(c: &mut Criterion) {
    let mut group = c.benchmark_group("logo");

    for asset in LOGOS {
        group.bench_function(asset.filename, |b| {
            b.iter(|| generate_logo(black_box(asset.size)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_backgrounds, bench_logos);
criterion_main!(benches);
