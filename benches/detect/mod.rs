//! Benchmarks for low-level detection primitives.

mod detector;
mod peak;

pub use detector::bench_detector;
pub use peak::bench_peak;
