//! Real-world frame streams.

mod streams;

pub use streams::bench_streams;
