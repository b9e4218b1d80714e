//! Real-time output stream driving the resynthesis engine.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::error::{MorphError, MorphResult};
use crate::params::EngineConfig;
use crate::synth::ResynthesisEngine;

/// Audio system owning the output stream
pub struct AudioSystem {
    /// Audio output stream (kept alive)
    _stream: cpal::Stream,
}

impl AudioSystem {
    /// Open the default output device and start playback.
    ///
    /// The engine moves into the callback, which then owns it exclusively:
    /// no locks or shared state between the callback and this thread.
    pub fn new(mut engine: ResynthesisEngine, engine_config: &EngineConfig) -> MorphResult<Self> {
        engine_config.validate().map_err(MorphError::InvalidConfig)?;

        // Setup audio output device
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(MorphError::NoOutputDevice)?;

        let default_config = device
            .default_output_config()
            .map_err(|e| MorphError::StreamConfig(e.to_string()))?;

        log::info!(
            "Audio: {} (device default {}Hz, engine {}Hz)",
            device.name().unwrap_or_else(|_| "Unknown".to_string()),
            default_config.sample_rate().0,
            engine_config.sample_rate_hz
        );

        let supported = device
            .supported_output_configs()
            .map_err(|e| MorphError::StreamConfig(e.to_string()))?;
        let range = find_supported(supported, engine_config).ok_or_else(|| {
            MorphError::StreamConfig(format!(
                "device has no {}Hz {}-channel f32 output",
                engine_config.sample_rate_hz, engine_config.channels
            ))
        })?;

        let config = stream_config(engine_config, range.buffer_size());
        log::debug!("Stream buffer: {:?}", config.buffer_size);
        let channels = engine_config.channels as usize;

        // Build audio output stream
        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                engine.fill_interleaved(data, channels);
            },
            |err| log::error!("Audio stream error: {}", err),
            None,
        )?;

        stream.play()?;

        Ok(Self { _stream: stream })
    }
}

/// First device range offering the engine's rate and channel count as f32
fn find_supported(
    ranges: impl IntoIterator<Item = cpal::SupportedStreamConfigRange>,
    engine_config: &EngineConfig,
) -> Option<cpal::SupportedStreamConfigRange> {
    let rate = cpal::SampleRate(engine_config.sample_rate_hz);
    ranges.into_iter().find(|range| {
        range.channels() == engine_config.channels
            && range.sample_format() == cpal::SampleFormat::F32
            && range.min_sample_rate() <= rate
            && rate <= range.max_sample_rate()
    })
}

/// Fixed-rate interleaved stream configuration.
///
/// The requested buffer is clamped to what the device reports; devices that
/// report no range get the backend default.
fn stream_config(
    engine_config: &EngineConfig,
    supported: &cpal::SupportedBufferSize,
) -> cpal::StreamConfig {
    let buffer_size = match *supported {
        cpal::SupportedBufferSize::Range { min, max } if min <= max => {
            cpal::BufferSize::Fixed(engine_config.buffer_frames.clamp(min, max))
        }
        _ => cpal::BufferSize::Default,
    };

    cpal::StreamConfig {
        channels: engine_config.channels,
        sample_rate: cpal::SampleRate(engine_config.sample_rate_hz),
        buffer_size,
    }
}
