//! Feedback side of the loop: what a display or log does with each result.
//!
//! Nothing here feeds back into detection. Acknowledgments are modelled as
//! "active until T" timers checked every tick, so a flash never blocks the
//! next frame read.

/// Timed acknowledgment state (banner and flash).
pub mod ack;
/// Feedback sink that reports through `tracing`.
pub mod logger;
/// Peak-to-bar mapping for level meters.
pub mod meter;

pub use ack::{AckView, Acknowledgment, FlashColor, Hold, HOLD_MS};
pub use logger::{LogSink, PeakLogger, PEAK_LOG_INTERVAL_MS};
pub use meter::Meter;

use crate::DetectionResult;

/// Consumer of per-frame detection results.
pub trait FeedbackSink {
    /// Called once per successfully read frame, after detection.
    fn present(&mut self, result: &DetectionResult, peak: u32, now: u64);
}
