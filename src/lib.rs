pub mod detect; // Debounced double-clap state machine
pub mod feedback; // Meter, acknowledgment timers, log sink
pub mod frame; // Frame source, peak extraction, clocks
pub mod monitor; // Poll loop tying source, detector and sink together

pub use detect::{ClapDetector, DetectionResult, DetectorConfig};
pub use frame::{Frame, FrameReadFailure, FrameSource};

/// Capture rate the default configuration is tuned for.
pub const SAMPLE_RATE: u32 = 16_000;
/// Samples per channel in one analysis frame (~16 ms at `SAMPLE_RATE`).
pub const FRAME_SAMPLES: usize = 256;
/// Peak amplitude treated as a full meter.
pub const FULL_SCALE: u32 = 12_000;
