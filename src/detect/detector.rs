use super::config::DetectorConfig;

/*
Double-Clap Detection
=====================

A clap is a short, loud transient. At 16 kHz with 256-sample frames each
frame covers ~16 ms, and a real clap rings for a handful of frames. The
detector turns that per-frame peak stream into "above-events" and then pairs
above-events into gestures.


Vocabulary
----------

  peak          Largest absolute sample in one frame. Computed upstream; the
                detector only sees one non-negative number per frame.

  above frame   A frame whose peak is strictly greater than the threshold.
                A frame exactly at the threshold counts as below.

  above-event   A debounced excursion above the threshold. Latched once
                `above_frames` consecutive above frames have been seen.

  latch         Set while the current excursion has already produced its
                above-event. Cleared only after `below_frames` consecutive
                below frames.

  gap           Time between the two most recent above-events.

  cooldown      Minimum time between two accepted gestures.


Hysteresis
----------

    peak
      │      ┌─┐ ┌┐                         ┌──┐
  thr ┼ ─ ─ ─│─│─││─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ ─ │─ │─ ─ ─
      │ ┌─┐  │ └─┘└┐  ┌┐                   │  └┐
      └─┘ └──┘     └──┘└───────────────────┘   └─────→ frames
             ▲ latch here      ▲ unlatch     ▲ latch again
             (2nd above)       (2nd below)

  - one isolated loud frame never latches
  - a short dip back below the threshold does not unlatch, so one ringing
    clap yields exactly one above-event


Pairing
-------

Only the frame that latches a fresh above-event is judged. If an earlier
above-event exists:

    gap = last_above - prev_above
    fire  ⇔  gap <= double_window  AND  (never fired OR now - last_trigger > cooldown)

On fire both above timestamps are forgotten, so the claps that formed this
gesture cannot pair with a later clap to form another one.


Timestamps
----------

All timestamps are `Option<u64>` milliseconds. `None` means "never", which
keeps a genuine timestamp of 0 distinct from "unset". Until the first
gesture fires the cooldown is treated as satisfied. Only differences between
timestamps are used, so irregular frame spacing is fine.
*/

/// Outcome of processing one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionResult {
    /// True exactly on the frame that completes a double clap.
    pub is_double_clap: bool,
    /// True if this frame latched a new above-event.
    pub above_event: bool,
    /// Gap between the two above-events that were judged on this frame.
    ///
    /// Present whenever a pairing was evaluated, whether or not it fired.
    pub gap_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default)]
struct DetectorState {
    above_count: u8,
    below_count: u8,
    above_latched: bool,
    last_above_ms: Option<u64>,
    prev_above_ms: Option<u64>,
    last_trigger_ms: Option<u64>,
}

/// Debounced double-clap state machine.
///
/// Feed it one peak per frame, in timestamp order. Frames that could not be
/// read should simply not be passed in.
#[derive(Debug, Clone)]
pub struct ClapDetector {
    config: DetectorConfig,
    state: DetectorState,
}

impl ClapDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config: config.sanitized(),
            state: DetectorState::default(),
        }
    }

    /// Advance the state machine by one frame.
    pub fn process(&mut self, peak: u32, now: u64) -> DetectionResult {
        let cfg = self.config;
        let st = &mut self.state;
        let mut result = DetectionResult::default();

        // Threshold comparison with debounce in both directions
        if peak > cfg.clap_threshold {
            st.above_count = st.above_count.saturating_add(1).min(cfg.above_frames);
            st.below_count = 0;
        } else {
            st.below_count = st.below_count.saturating_add(1).min(cfg.below_frames);
            if st.below_count >= cfg.below_frames {
                st.above_count = 0;
                st.above_latched = false;
            }
        }

        if !st.above_latched && st.above_count >= cfg.above_frames {
            st.above_latched = true;
            st.prev_above_ms = st.last_above_ms;
            st.last_above_ms = Some(now);
            result.above_event = true;
        }

        if !result.above_event {
            return result;
        }

        if let (Some(prev), Some(last)) = (st.prev_above_ms, st.last_above_ms) {
            let gap = last.saturating_sub(prev);
            result.gap_ms = Some(gap);

            let cooled_down = st
                .last_trigger_ms
                .map_or(true, |t| now.saturating_sub(t) > cfg.cooldown_ms);

            if gap <= cfg.double_window_ms && cooled_down {
                st.last_trigger_ms = Some(now);
                st.prev_above_ms = None;
                st.last_above_ms = None;
                result.is_double_clap = true;
            }
        }

        result
    }

    /// Forget all history, as if freshly constructed.
    pub fn reset(&mut self) {
        self.state = DetectorState::default();
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Timestamp of the most recent above-event still eligible for pairing.
    pub fn last_above_ms(&self) -> Option<u64> {
        self.state.last_above_ms
    }

    /// Timestamp of the above-event before `last_above_ms`.
    pub fn prev_above_ms(&self) -> Option<u64> {
        self.state.prev_above_ms
    }

    /// Timestamp of the last accepted double clap.
    pub fn last_trigger_ms(&self) -> Option<u64> {
        self.state.last_trigger_ms
    }

    /// Whether the current excursion above threshold has already been counted.
    pub fn is_latched(&self) -> bool {
        self.state.above_latched
    }
}

impl Default for ClapDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
