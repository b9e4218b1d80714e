//! WAV decoding and mono downmix.

use std::path::Path;

use crate::error::{MorphError, MorphResult};

/// A decoded recording, already reduced to one channel
#[derive(Debug, Clone)]
pub struct Recording {
    pub samples: Vec<f32>,
    pub sample_rate_hz: u32,
    /// Channel count before downmix
    pub source_channels: u16,
}

impl Recording {
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate_hz as f64
    }
}

/// Decode a WAV file to mono `f32` samples.
///
/// Integer PCM is scaled to `[-1, 1)`. Mono passes through, stereo is averaged,
/// anything else is rejected. No resampling is done.
pub fn load_recording(path: &Path) -> MorphResult<Recording> {
    let file_error = |source| MorphError::FileOpen {
        path: path.to_path_buf(),
        source,
    };

    let reader = hound::WavReader::open(path).map_err(file_error)?;
    let spec = reader.spec();

    if spec.channels != 1 && spec.channels != 2 {
        return Err(MorphError::UnsupportedChannelLayout {
            path: path.to_path_buf(),
            channels: spec.channels,
        });
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(file_error)?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|x| x as f32 * scale))
                .collect::<Result<_, _>>()
                .map_err(file_error)?
        }
    };

    Ok(Recording {
        samples: downmix(&interleaved, spec.channels),
        sample_rate_hz: spec.sample_rate,
        source_channels: spec.channels,
    })
}

/// Average interleaved frames down to one channel
pub fn downmix(interleaved: &[f32], channels: u16) -> Vec<f32> {
    match channels {
        0 | 1 => interleaved.to_vec(),
        n => interleaved
            .chunks_exact(n as usize)
            .map(|frame| frame.iter().sum::<f32>() / n as f32)
            .collect(),
    }
}
