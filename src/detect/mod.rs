//! Double-clap gesture detection.
//!
//! The detector consumes one peak amplitude per frame together with a
//! monotonic timestamp and decides, synchronously, whether that frame
//! completes a double clap. It owns all of its hysteresis and timing state,
//! performs no I/O and never allocates, so it can run on the same thread
//! that pulls frames from the audio device.

/// Threshold, debounce and timing parameters.
pub mod config;
/// The detector state machine.
pub mod detector;

pub use config::DetectorConfig;
pub use detector::{ClapDetector, DetectionResult};
