use crate::FULL_SCALE;

/// Maps peak amplitudes onto a bar of `bar_max` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meter {
    pub bar_max: u32,
    pub full_scale: u32,
}

impl Meter {
    pub fn new(bar_max: u32, full_scale: u32) -> Self {
        Self {
            bar_max,
            full_scale: full_scale.max(1),
        }
    }

    /// Same meter with a different length, e.g. to fit a resized terminal.
    pub fn with_bar_max(self, bar_max: u32) -> Self {
        Self { bar_max, ..self }
    }

    /// Bar length for `peak`, clamped to `[0, bar_max]`.
    pub fn bar_len(&self, peak: u32) -> u32 {
        let scaled = peak as u64 * self.bar_max as u64 / self.full_scale as u64;
        scaled.min(self.bar_max as u64) as u32
    }

    /// Position of the threshold marker on the same scale.
    pub fn threshold_marker(&self, threshold: u32) -> u32 {
        self.bar_len(threshold)
    }

    /// Fill ratio in `[0.0, 1.0]`.
    pub fn ratio(&self, peak: u32) -> f64 {
        if self.bar_max == 0 {
            return 0.0;
        }
        self.bar_len(peak) as f64 / self.bar_max as f64
    }
}

impl Default for Meter {
    fn default() -> Self {
        Self::new(120, FULL_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_against_full_scale() {
        let meter = Meter::default();
        assert_eq!(meter.bar_len(0), 0);
        assert_eq!(meter.bar_len(6000), 60);
        assert_eq!(meter.threshold_marker(9600), 96);
    }

    #[test]
    fn clamps_above_full_scale() {
        let meter = Meter::default();
        assert_eq!(meter.bar_len(32768), 120);
        assert_eq!(meter.ratio(u32::MAX), 1.0);
    }

    #[test]
    fn zero_length_bar_is_empty() {
        let meter = Meter::default().with_bar_max(0);
        assert_eq!(meter.bar_len(12000), 0);
        assert_eq!(meter.ratio(12000), 0.0);
    }
}
