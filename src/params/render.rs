//! Offline render configuration.

use std::path::PathBuf;

/// Render-to-file configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output WAV path
    pub output_path: PathBuf,

    /// Duration to render (seconds); `None` renders exactly one loop
    pub duration_secs: Option<f64>,
}

impl RenderConfig {
    pub fn new(output_path: impl Into<PathBuf>, duration_secs: Option<f64>) -> Self {
        Self {
            output_path: output_path.into(),
            duration_secs,
        }
    }

    /// Validate configuration (duration must be finite and > 0)
    pub fn validate(&self) -> Result<(), String> {
        match self.duration_secs {
            Some(secs) if !secs.is_finite() || secs <= 0.0 => Err(format!(
                "Render duration must be finite and > 0, got {}",
                secs
            )),
            _ => Ok(()),
        }
    }

    /// Total number of output frames to write
    pub fn total_frames(&self, sample_rate_hz: u32, loop_len: usize) -> usize {
        match self.duration_secs {
            Some(secs) => (secs * sample_rate_hz as f64).ceil() as usize,
            None => loop_len,
        }
    }
}
