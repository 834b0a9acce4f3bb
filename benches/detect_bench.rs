//! Benchmarks for the detection path.
//!
//! Run with: cargo bench
//!
//! One frame at 16 kHz with 256 samples per frame leaves ~16 ms for peak
//! extraction, detection and feedback. These benchmarks check the core takes
//! a vanishing fraction of that.
//!
//! Benchmark groups:
//!   - detect/*     Peak extraction and the detector state machine
//!   - scenarios/*  Longer frame streams shaped like real input

use criterion::{criterion_group, criterion_main};

mod detect;
mod scenarios;

/// Frame counts used for stream benchmarks (~1 s, ~10 s, ~1 min of audio).
pub const STREAM_LENGTHS: &[usize] = &[64, 640, 3840];

criterion_group!(
    benches,
    detect::bench_peak,
    detect::bench_detector,
    scenarios::bench_streams,
);
criterion_main!(benches);
