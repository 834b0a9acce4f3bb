/// Largest absolute value on the first channel of an interleaved buffer.
///
/// `channels` is the interleave stride; 0 is treated as mono. A trailing
/// partial frame is still inspected for its first channel. `i16::MIN`
/// maps to 32768 rather than overflowing.
#[inline]
pub fn peak_amplitude(samples: &[i16], channels: usize) -> u32 {
    samples
        .iter()
        .step_by(channels.max(1))
        .map(|&s| s.unsigned_abs() as u32)
        .max()
        .unwrap_or(0)
}
