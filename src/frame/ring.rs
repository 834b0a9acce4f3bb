//! Frame source fed by an audio callback through an `rtrb` ring.
//!
//! The capture callback pushes interleaved `i16` samples into the producer
//! half without blocking; the poll loop owns the consumer half and slices the
//! stream into fixed-size frames.

use std::{
    thread,
    time::{Duration, Instant},
};

use rtrb::Consumer;

use super::{peak_amplitude, Clock, Frame, FrameReadFailure, FrameSource, MonotonicClock};
use crate::FRAME_SAMPLES;

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);
const POLL_INTERVAL: Duration = Duration::from_millis(2);

pub struct RingFrameSource<C: Clock = MonotonicClock> {
    rx: Consumer<i16>,
    channels: usize,
    /// Interleaved samples per frame (`FRAME_SAMPLES * channels`)
    frame_len: usize,
    /// Partially assembled frame, kept across timeouts
    pending: Vec<i16>,
    timeout: Duration,
    clock: C,
}

impl RingFrameSource<MonotonicClock> {
    pub fn new(rx: Consumer<i16>, channels: usize) -> Self {
        Self::with_clock(rx, channels, MonotonicClock::new())
    }
}

impl<C: Clock> RingFrameSource<C> {
    pub fn with_clock(rx: Consumer<i16>, channels: usize, clock: C) -> Self {
        let channels = channels.max(1);
        let frame_len = FRAME_SAMPLES * channels;
        Self {
            rx,
            channels,
            frame_len,
            pending: Vec::with_capacity(frame_len),
            timeout: DEFAULT_TIMEOUT,
            clock,
        }
    }

    /// How long `read_frame` waits for a complete frame before failing.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn fill_pending(&mut self) {
        let needed = self.frame_len - self.pending.len();
        let available = self.rx.slots().min(needed);
        if available == 0 {
            return;
        }
        if let Ok(chunk) = self.rx.read_chunk(available) {
            let (first, second) = chunk.as_slices();
            self.pending.extend_from_slice(first);
            self.pending.extend_from_slice(second);
            chunk.commit_all();
        }
    }
}

impl<C: Clock> FrameSource for RingFrameSource<C> {
    fn read_frame(&mut self) -> Result<Frame, FrameReadFailure> {
        let deadline = Instant::now() + self.timeout;

        loop {
            self.fill_pending();

            if self.pending.len() == self.frame_len {
                let peak = peak_amplitude(&self.pending, self.channels);
                self.pending.clear();
                return Ok(Frame::new(peak, self.clock.now_ms()));
            }

            if self.rx.is_abandoned() && self.rx.slots() == 0 {
                return Err(FrameReadFailure::Disconnected);
            }

            if Instant::now() >= deadline {
                return Err(FrameReadFailure::Timeout);
            }

            thread::sleep(POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtrb::RingBuffer;
    use std::cell::Cell;

    struct FixedClock(Cell<u64>);

    impl Clock for FixedClock {
        fn now_ms(&self) -> u64 {
            let now = self.0.get();
            self.0.set(now + 16);
            now
        }
    }

    #[test]
    fn assembles_stereo_frames_from_left_channel() {
        let (mut tx, rx) = RingBuffer::<i16>::new(FRAME_SAMPLES * 4);
        let mut source = RingFrameSource::with_clock(rx, 2, FixedClock(Cell::new(1000)));

        for i in 0..FRAME_SAMPLES {
            let left = if i == 10 { -7000 } else { 100 };
            tx.push(left).unwrap();
            tx.push(i16::MAX).unwrap(); // right channel is ignored
        }

        let frame = source.read_frame().unwrap();
        assert_eq!(frame, Frame::new(7000, 1000));
    }

    #[test]
    fn partial_frame_times_out_and_is_kept() {
        let (mut tx, rx) = RingBuffer::<i16>::new(FRAME_SAMPLES * 2);
        let mut source = RingFrameSource::new(rx, 1).with_timeout(Duration::ZERO);

        for _ in 0..FRAME_SAMPLES / 2 {
            tx.push(3000).unwrap();
        }
        assert_eq!(source.read_frame(), Err(FrameReadFailure::Timeout));

        for _ in 0..FRAME_SAMPLES / 2 {
            tx.push(10).unwrap();
        }
        assert_eq!(source.read_frame().unwrap().peak, 3000);
    }

    #[test]
    fn dropped_producer_reports_disconnect() {
        let (tx, rx) = RingBuffer::<i16>::new(16);
        let mut source = RingFrameSource::new(rx, 1).with_timeout(Duration::from_millis(50));
        drop(tx);
        assert_eq!(source.read_frame(), Err(FrameReadFailure::Disconnected));
    }
}
