//! Monitor - the single-threaded poll loop
//!
//! One iteration reads a frame, runs the detector and hands the result to the
//! feedback sink. A failed read skips the detector entirely and asks the
//! caller to back off briefly; detector state is never touched on failure.

use std::{thread, time::Duration};

use tracing::{debug, warn};

use crate::{
    detect::{ClapDetector, DetectionResult},
    feedback::FeedbackSink,
    frame::{Frame, FrameReadFailure, FrameSource},
};

/// Delay after a failed frame read before trying again.
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(200);

/// Outcome of one loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// A frame was read and processed
    Frame { frame: Frame, result: DetectionResult },
    /// The read failed; wait this long before the next tick
    Backoff {
        error: FrameReadFailure,
        delay: Duration,
    },
}

impl Tick {
    pub fn is_double_clap(&self) -> bool {
        matches!(self, Tick::Frame { result, .. } if result.is_double_clap)
    }
}

/// Owns the detector and drives it from a frame source into a sink.
pub struct Monitor<S, K> {
    detector: ClapDetector,
    source: S,
    sink: K,
    backoff: Duration,
}

impl<S: FrameSource, K: FeedbackSink> Monitor<S, K> {
    pub fn new(detector: ClapDetector, source: S, sink: K) -> Self {
        Self {
            detector,
            source,
            sink,
            backoff: DEFAULT_BACKOFF,
        }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Run one iteration. Never sleeps; a backoff is returned to the caller.
    pub fn tick(&mut self) -> Tick {
        match self.source.read_frame() {
            Ok(frame) => {
                let result = self.detector.process(frame.peak, frame.timestamp_ms);
                if result.above_event {
                    debug!(at_ms = frame.timestamp_ms, peak = frame.peak, gap_ms = ?result.gap_ms, "above event");
                }
                self.sink.present(&result, frame.peak, frame.timestamp_ms);
                Tick::Frame { frame, result }
            }
            Err(error) => {
                warn!(%error, "record_failed");
                Tick::Backoff {
                    error,
                    delay: self.backoff,
                }
            }
        }
    }

    /// Loop until `stop` returns true for a tick, sleeping through backoffs.
    pub fn run_until(&mut self, mut stop: impl FnMut(&Tick) -> bool) {
        loop {
            let tick = self.tick();
            if stop(&tick) {
                return;
            }
            if let Tick::Backoff { delay, .. } = tick {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
        }
    }

    pub fn detector(&self) -> &ClapDetector {
        &self.detector
    }

    pub fn detector_mut(&mut self) -> &mut ClapDetector {
        &mut self.detector
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_parts(self) -> (ClapDetector, S, K) {
        (self.detector, self.source, self.sink)
    }
}
