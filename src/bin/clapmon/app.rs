//! Clapmon - application builder and runner

use std::{fs::File, sync::Mutex, time::Duration};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use double_clap::{
    feedback::LogSink,
    frame::{FrameReadFailure, RingFrameSource},
    monitor::{Monitor, Tick},
    ClapDetector, DetectorConfig,
};

use super::capture;
use super::ui::{UiApp, UiState};

const LOG_FILE: &str = "clapmon.log";

/// Read timeout per frame in TUI mode, short enough to keep keys responsive
const UI_READ_TIMEOUT: Duration = Duration::from_millis(20);

/// Main application builder
pub struct Clapmon {
    config: DetectorConfig,
    headless: bool,
}

impl Clapmon {
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
            headless: false,
        }
    }

    /// Set the detector tuning
    pub fn config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Log lines to stderr instead of drawing the TUI
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Run the application (takes over until quit or device loss)
    pub fn run(self) -> EyreResult<()> {
        self.init_tracing()?;

        let capture = capture::open_default_input()?;
        info!(
            device = %capture.device_name,
            threshold = self.config.clap_threshold,
            window_ms = self.config.double_window_ms,
            cooldown_ms = self.config.cooldown_ms,
            "clapmon started"
        );

        let detector = ClapDetector::new(self.config);

        if self.headless {
            let source = RingFrameSource::new(capture.samples, capture.channels);
            let mut monitor = Monitor::new(detector, source, LogSink::new());
            monitor.run_until(|tick| {
                matches!(
                    tick,
                    Tick::Backoff {
                        error: FrameReadFailure::Disconnected,
                        ..
                    }
                )
            });
            info!(detections = monitor.sink().detections(), "input closed");
            drop(capture.stream);
            return Ok(());
        }

        let source =
            RingFrameSource::new(capture.samples, capture.channels).with_timeout(UI_READ_TIMEOUT);
        let state = UiState::new(capture.device_name.clone(), capture.sample_rate);
        let mut app = UiApp::new(Monitor::new(detector, source, state));

        let mut terminal = ratatui::init();
        let res = app.run(&mut terminal);
        ratatui::restore();

        drop(capture.stream);
        res
    }

    fn init_tracing(&self) -> EyreResult<()> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        if self.headless {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        } else {
            // stderr belongs to the terminal UI
            let file = File::create(LOG_FILE).wrap_err_with(|| format!("failed to create {LOG_FILE}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        Ok(())
    }
}

impl Default for Clapmon {
    fn default() -> Self {
        Self::new()
    }
}
