use tracing::{debug, info};

use super::FeedbackSink;
use crate::DetectionResult;

/// Minimum spacing between diagnostic peak lines.
pub const PEAK_LOG_INTERVAL_MS: u64 = 200;

/// Rate limiter for peak diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct PeakLogger {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl PeakLogger {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// True if a line should be emitted at `now`; records it if so.
    pub fn should_log(&mut self, now: u64) -> bool {
        let due = self
            .last_ms
            .map_or(true, |last| now.saturating_sub(last) >= self.interval_ms);
        if due {
            self.last_ms = Some(now);
        }
        due
    }
}

impl Default for PeakLogger {
    fn default() -> Self {
        Self::new(PEAK_LOG_INTERVAL_MS)
    }
}

/// Headless sink: throttled peak lines and one line per detection.
#[derive(Debug, Default)]
pub struct LogSink {
    peaks: PeakLogger,
    detections: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of double claps seen so far.
    pub fn detections(&self) -> u64 {
        self.detections
    }
}

impl FeedbackSink for LogSink {
    fn present(&mut self, result: &DetectionResult, peak: u32, now: u64) {
        if self.peaks.should_log(now) {
            debug!(peak, "peak");
        }
        if result.is_double_clap {
            self.detections += 1;
            info!(at_ms = now, gap_ms = ?result.gap_ms, count = self.detections, "double_clap");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_lines_are_throttled() {
        let mut logger = PeakLogger::default();
        assert!(logger.should_log(0));
        assert!(!logger.should_log(16));
        assert!(!logger.should_log(199));
        assert!(logger.should_log(200));
        assert!(!logger.should_log(350));
        assert!(logger.should_log(400));
    }

    #[test]
    fn counts_detections() {
        let mut sink = LogSink::new();
        let quiet = DetectionResult::default();
        let fired = DetectionResult {
            is_double_clap: true,
            above_event: true,
            gap_ms: Some(300),
        };
        sink.present(&quiet, 10, 0);
        sink.present(&fired, 11_000, 16);
        sink.present(&quiet, 10, 32);
        assert_eq!(sink.detections(), 1);
    }
}
