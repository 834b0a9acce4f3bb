//! Whole streams of frames: room noise with occasional claps.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use double_clap::{ClapDetector, Frame};

use crate::STREAM_LENGTHS;

/// Deterministic room noise with a double clap every ~2 s.
fn room_stream(len: usize) -> Vec<Frame> {
    (0..len)
        .map(|i| {
            let t = i as u64 * 16;
            let phase = i % 128;
            let peak = match phase {
                0 | 1 | 20 | 21 => 11_500,
                _ => 200 + ((i as u32).wrapping_mul(2_654_435_761) >> 22) % 1500,
            };
            Frame::new(peak, t)
        })
        .collect()
}

pub fn bench_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/streams");

    for &len in STREAM_LENGTHS {
        let frames = room_stream(len);
        group.bench_with_input(BenchmarkId::new("room", len), &frames, |b, frames| {
            b.iter(|| {
                let mut det = ClapDetector::default();
                let mut fired = 0u32;
                for f in frames {
                    if det.process(black_box(f.peak), f.timestamp_ms).is_double_clap {
                        fired += 1;
                    }
                }
                fired
            })
        });
    }

    group.finish();
}
