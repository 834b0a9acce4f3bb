//! Display state, fed by the monitor as a feedback sink

use std::collections::VecDeque;

use rand::rngs::ThreadRng;

use double_clap::{
    feedback::{AckView, Acknowledgment, FeedbackSink, Meter, PeakLogger, HOLD_MS},
    DetectionResult, FrameReadFailure,
};

/// Lines kept in the event log panel
const EVENT_LOG_LEN: usize = 64;

pub struct UiState {
    /// Input device name
    pub device_name: String,
    /// Capture rate in Hz
    pub sample_rate: u32,
    /// Latest frame peak
    pub peak: u32,
    /// Timestamp of the latest frame
    pub now: u64,
    /// Peak meter scaling (bar length is resized to the widget)
    pub meter: Meter,
    /// Accepted double claps
    pub detections: u64,
    /// Failed frame reads
    pub failures: u64,
    /// Most recent lines, newest last
    pub events: VecDeque<String>,
    ack: Acknowledgment,
    peak_log: PeakLogger,
    rng: ThreadRng,
}

impl UiState {
    pub fn new(device_name: String, sample_rate: u32) -> Self {
        Self {
            device_name,
            sample_rate,
            peak: 0,
            now: 0,
            meter: Meter::default(),
            detections: 0,
            failures: 0,
            events: VecDeque::with_capacity(EVENT_LOG_LEN),
            // Banner outlives the flash
            ack: Acknowledgment::new(HOLD_MS, HOLD_MS * 2),
            peak_log: PeakLogger::default(),
            rng: rand::thread_rng(),
        }
    }

    /// Resolve the acknowledgment view at `now`
    pub fn ack_view(&mut self, now: u64) -> AckView {
        self.ack.view(now)
    }

    pub fn record_failure(&mut self, error: &FrameReadFailure) {
        self.failures += 1;
        self.push_event(format!("{:>8} ms  record_failed: {error}", self.now));
    }

    pub fn push_event(&mut self, line: String) {
        if self.events.len() == EVENT_LOG_LEN {
            self.events.pop_front();
        }
        self.events.push_back(line);
    }
}

impl FeedbackSink for UiState {
    fn present(&mut self, result: &DetectionResult, peak: u32, now: u64) {
        self.peak = peak;
        self.now = now;

        if self.peak_log.should_log(now) {
            tracing::trace!(peak, "peak");
        }

        if result.is_double_clap {
            self.detections += 1;
            self.ack.trigger(now, &mut self.rng);
            let gap = result.gap_ms.unwrap_or_default();
            self.push_event(format!("{now:>8} ms  double_clap (gap {gap} ms)"));
            tracing::info!(at_ms = now, gap_ms = gap, "double_clap");
        } else if let Some(gap) = result.gap_ms {
            self.push_event(format!("{now:>8} ms  pair rejected (gap {gap} ms)"));
        } else if result.above_event {
            self.push_event(format!("{now:>8} ms  clap"));
        }
    }
}
