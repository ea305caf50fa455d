mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gplot::prelude::{normalize, Color, PlotOption, Style};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_options(count: usize, seed: u64) -> Vec<PlotOption> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| match rng.random_range(0..3u32) {
            0 => PlotOption::title(format!("graph {i}")),
            1 => PlotOption::Style(match i % 3 {
                0 => Style::Lines,
                1 => Style::Points,
                _ => Style::Dots,
            }),
            _ => PlotOption::Color(Color::rgb(
                rng.random(),
                rng.random(),
                rng.random(),
            )),
        })
        .collect()
}

fn normalize_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("options/normalize");

    for &n in &[3usize, 16, 256, 4096] {
        let options = make_options(n, 0xC0FFEE);
        group.throughput(common::elements_throughput(n));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(normalize(black_box(&options))));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = normalize_benches
}
criterion_main!(benches);
