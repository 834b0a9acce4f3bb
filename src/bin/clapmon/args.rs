//! Command-line options

use clap::Parser;

use double_clap::DetectorConfig;

#[derive(Parser, Debug)]
#[command(name = "clapmon")]
#[command(about = "Live double-clap monitor for the default microphone", long_about = None)]
pub struct Args {
    /// Log lines to stderr instead of drawing the TUI
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Peak amplitude a frame must exceed to count as loud
    #[arg(long, default_value_t = DetectorConfig::default().clap_threshold, env = "CLAPMON_THRESHOLD")]
    pub threshold: u32,

    /// Largest gap between two claps, in milliseconds
    #[arg(long, default_value_t = DetectorConfig::default().double_window_ms, env = "CLAPMON_WINDOW_MS")]
    pub window_ms: u64,

    /// Minimum spacing between accepted double claps, in milliseconds
    #[arg(long, default_value_t = DetectorConfig::default().cooldown_ms, env = "CLAPMON_COOLDOWN_MS")]
    pub cooldown_ms: u64,
}

impl Args {
    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig::new()
            .threshold(self.threshold)
            .double_window_ms(self.window_ms)
            .cooldown_ms(self.cooldown_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "clapmon",
            "--headless",
            "--threshold",
            "5000",
            "--window-ms",
            "600",
            "--cooldown-ms",
            "2000",
        ])
        .unwrap();

        assert!(args.headless);
        let config = args.detector_config();
        assert_eq!(config.clap_threshold, 5000);
        assert_eq!(config.double_window_ms, 600);
        assert_eq!(config.cooldown_ms, 2000);
        assert_eq!(config.above_frames, DetectorConfig::default().above_frames);
    }

    #[test]
    fn malformed_threshold_is_rejected() {
        assert!(Args::try_parse_from(["clapmon", "--threshold", "9k"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["clapmon", "--headles"]).is_err());
    }
}
