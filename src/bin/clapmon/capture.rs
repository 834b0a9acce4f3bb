//! Microphone capture into a lock-free sample ring.

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    SampleFormat, SampleRate, Stream, StreamConfig, SupportedStreamConfig,
};
use rtrb::{Consumer, Producer, RingBuffer};
use tracing::{info, warn};

use double_clap::{FRAME_SAMPLES, SAMPLE_RATE};

/// Capacity in frames for the callback→loop ring
const RING_FRAMES: usize = 64;

/// A running input stream and the consumer side of its ring.
pub struct Capture {
    /// Keeps the device running; dropping it stops capture
    pub stream: Stream,
    pub samples: Consumer<i16>,
    pub channels: usize,
    pub sample_rate: u32,
    pub device_name: String,
}

/// Open the default input device, preferring the detector's native rate.
pub fn open_default_input() -> EyreResult<Capture> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| eyre!("no default input device available"))?;
    let device_name = device.name().unwrap_or_else(|_| "unknown".into());

    let supported = pick_config(&device)?;
    let sample_format = supported.sample_format();
    let sample_rate = supported.sample_rate().0;
    let channels = supported.channels() as usize;
    let config: StreamConfig = supported.into();

    if sample_rate != SAMPLE_RATE {
        warn!(
            sample_rate,
            "device does not offer {SAMPLE_RATE} Hz; frames will be shorter or longer than tuned for"
        );
    }
    info!(device = %device_name, sample_rate, channels, ?sample_format, "opening input");

    let (producer, samples) = RingBuffer::<i16>::new(FRAME_SAMPLES * channels * RING_FRAMES);

    let stream = match sample_format {
        SampleFormat::I16 => build_stream::<i16>(&device, &config, producer, |s| s),
        SampleFormat::F32 => build_stream::<f32>(&device, &config, producer, |s| {
            (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
        }),
        SampleFormat::U16 => {
            build_stream::<u16>(&device, &config, producer, |s| (s as i32 - 32_768) as i16)
        }
        other => return Err(eyre!("unsupported sample format: {other:?}")),
    }?;

    stream.play().wrap_err("failed to start input stream")?;

    Ok(Capture {
        stream,
        samples,
        channels,
        sample_rate,
        device_name,
    })
}

fn pick_config(device: &cpal::Device) -> EyreResult<SupportedStreamConfig> {
    let preferred = device
        .supported_input_configs()
        .wrap_err("failed to query input configs")?
        .find(|range| {
            range.min_sample_rate().0 <= SAMPLE_RATE && SAMPLE_RATE <= range.max_sample_rate().0
        })
        .map(|range| range.with_sample_rate(SampleRate(SAMPLE_RATE)));

    match preferred {
        Some(config) => Ok(config),
        None => device
            .default_input_config()
            .wrap_err("failed to fetch default input config"),
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    mut producer: Producer<i16>,
    to_i16: fn(T) -> i16,
) -> EyreResult<Stream>
where
    T: cpal::SizedSample + Send + 'static,
{
    let stream = device
        .build_input_stream(
            config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                // Drop whole buffers on overflow so channels stay interleaved
                if producer.slots() < data.len() {
                    return;
                }
                for &s in data {
                    let _ = producer.push(to_i16(s));
                }
            },
            |err| warn!(%err, "input stream error"),
            None,
        )
        .wrap_err("failed to build input stream")?;

    Ok(stream)
}
