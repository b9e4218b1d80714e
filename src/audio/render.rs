//! Offline rendering of the engine output to a WAV file.

use crate::error::{MorphError, MorphResult};
use crate::params::{EngineConfig, RenderConfig};
use crate::synth::ResynthesisEngine;

/// Run the engine exactly as the output callback would and write the result.
///
/// Returns the number of frames written.
pub fn render_to_wav(
    engine: &mut ResynthesisEngine,
    render: &RenderConfig,
    engine_config: &EngineConfig,
) -> MorphResult<usize> {
    render.validate().map_err(MorphError::InvalidConfig)?;

    let spec = hound::WavSpec {
        channels: engine_config.channels,
        sample_rate: engine_config.sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer =
        hound::WavWriter::create(&render.output_path, spec).map_err(MorphError::Render)?;

    let total_frames = render.total_frames(engine_config.sample_rate_hz, engine.loop_len());
    let channels = engine_config.channels as usize;
    let block_frames = engine_config.buffer_frames.max(1) as usize;
    let mut block = vec![0.0f32; block_frames * channels];

    let mut written = 0;
    while written < total_frames {
        let frames = (total_frames - written).min(block_frames);
        let block = &mut block[..frames * channels];
        engine.fill_interleaved(block, channels);
        for &sample in block.iter() {
            writer.write_sample(sample).map_err(MorphError::Render)?;
        }
        written += frames;
    }

    writer.finalize().map_err(MorphError::Render)?;
    log::info!(
        "Rendered {} frames to {}",
        written,
        render.output_path.display()
    );
    Ok(written)
}
