//! Benchmarks for the detector state machine.

use std::hint::black_box;

use criterion::Criterion;
use double_clap::ClapDetector;

pub fn bench_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect/detector");

    // Steady silence: the common case
    let mut det = ClapDetector::default();
    let mut t = 0u64;
    group.bench_function("silence", |b| {
        b.iter(|| {
            t += 16;
            det.process(black_box(300), black_box(t))
        })
    });

    // Alternating loud/quiet pairs: latch and unlatch every few frames
    let mut det = ClapDetector::default();
    let mut t = 0u64;
    let pattern = [11_000u32, 11_000, 200, 200];
    let mut i = 0usize;
    group.bench_function("clapping", |b| {
        b.iter(|| {
            t += 16;
            i = (i + 1) % pattern.len();
            det.process(black_box(pattern[i]), black_box(t))
        })
    });

    group.finish();
}
