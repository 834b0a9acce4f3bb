use crate::FULL_SCALE;

/// Detector tuning.
///
/// Fixed for the lifetime of a [`ClapDetector`](super::ClapDetector); build
/// a new detector to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectorConfig {
    /// Peak amplitude a frame must strictly exceed to count as "above".
    pub clap_threshold: u32,
    /// Consecutive above frames needed to latch an above-event.
    pub above_frames: u8,
    /// Consecutive below frames needed before a new above-event can latch.
    pub below_frames: u8,
    /// Largest gap between two above-events that still forms a double clap.
    pub double_window_ms: u64,
    /// Minimum spacing between accepted gestures (strictly greater than).
    pub cooldown_ms: u64,
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self {
            clap_threshold: FULL_SCALE * 4 / 5, // 80% of full scale
            above_frames: 2,
            below_frames: 2,
            double_window_ms: 800,
            cooldown_ms: 1500,
        }
    }

    pub fn threshold(mut self, threshold: u32) -> Self {
        self.clap_threshold = threshold;
        self
    }

    /// Set both debounce depths. Zero is clamped to one frame.
    pub fn debounce(mut self, above: u8, below: u8) -> Self {
        self.above_frames = above.max(1);
        self.below_frames = below.max(1);
        self
    }

    pub fn double_window_ms(mut self, window: u64) -> Self {
        self.double_window_ms = window;
        self
    }

    pub fn cooldown_ms(mut self, cooldown: u64) -> Self {
        self.cooldown_ms = cooldown;
        self
    }

    /// Copy with debounce depths forced to at least one frame.
    ///
    /// Deserialized or hand-built configs can carry zeros; the detector
    /// applies this on construction.
    pub fn sanitized(self) -> Self {
        Self {
            above_frames: self.above_frames.max(1),
            below_frames: self.below_frames.max(1),
            ..self
        }
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = DetectorConfig::default();
        assert_eq!(config.clap_threshold, 9600);
        assert_eq!(config.above_frames, 2);
        assert_eq!(config.below_frames, 2);
        assert_eq!(config.double_window_ms, 800);
        assert_eq!(config.cooldown_ms, 1500);
    }

    #[test]
    fn debounce_never_drops_to_zero() {
        let config = DetectorConfig::new().debounce(0, 0);
        assert_eq!((config.above_frames, config.below_frames), (1, 1));

        let raw = DetectorConfig {
            above_frames: 0,
            ..DetectorConfig::default()
        };
        assert_eq!(raw.sanitized().above_frames, 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: DetectorConfig =
            serde_json::from_str(r#"{ "clap_threshold": 5000 }"#).unwrap();
        assert_eq!(config.clap_threshold, 5000);
        assert_eq!(config.cooldown_ms, 1500);
    }
}
