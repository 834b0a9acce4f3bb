//! Frame acquisition: turning raw capture buffers into `{peak, timestamp}`
//! frames for the detector.

/// Monotonic millisecond clocks.
pub mod clock;
/// Absolute-peak extraction from interleaved PCM.
pub mod peak;
/// Frame source backed by a lock-free sample ring.
#[cfg(feature = "rtrb")]
pub mod ring;

pub use clock::{Clock, MonotonicClock};
pub use peak::peak_amplitude;
#[cfg(feature = "rtrb")]
pub use ring::RingFrameSource;

use thiserror::Error;

/// One analysis frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Largest absolute sample in the frame.
    pub peak: u32,
    /// When the frame was read, in milliseconds on a monotonic clock.
    pub timestamp_ms: u64,
}

impl Frame {
    pub fn new(peak: u32, timestamp_ms: u64) -> Self {
        Self { peak, timestamp_ms }
    }
}

/// A frame could not be read this tick.
///
/// Always transient: the caller skips the tick and retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameReadFailure {
    #[error("no complete frame within the read timeout")]
    Timeout,
    #[error("audio producer disconnected")]
    Disconnected,
    #[error("audio device error: {0}")]
    Device(String),
}

/// Produces frames in timestamp order, one per call.
pub trait FrameSource {
    fn read_frame(&mut self) -> Result<Frame, FrameReadFailure>;
}
