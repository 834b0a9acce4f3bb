//! Benchmarks for peak extraction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use double_clap::{frame::peak_amplitude, FRAME_SAMPLES};

pub fn bench_peak(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect/peak");

    for channels in [1usize, 2] {
        let samples: Vec<i16> = (0..FRAME_SAMPLES * channels)
            .map(|i| ((i as i32 * 7919) % 20_000 - 10_000) as i16)
            .collect();

        group.bench_with_input(BenchmarkId::new("channels", channels), &channels, |b, &ch| {
            b.iter(|| peak_amplitude(black_box(&samples), black_box(ch)))
        });
    }

    group.finish();
}
