//! Short-time analysis configuration.

/// Framing and transform sizes for the analysis pipeline
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// New input samples consumed per frame
    pub hop_size: usize,

    /// Hann window length (applied to the head of the FFT buffer)
    pub window_size: usize,

    /// FFT buffer length (must be power of 2, zero-padded past the hop)
    pub fft_size: usize,

    /// Rate used to turn bin indices into Hz (engine rate, not file rate)
    pub sample_rate_hz: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hop_size: analysis_constants::HOP_SIZE,
            window_size: analysis_constants::WINDOW_SIZE,
            fft_size: analysis_constants::FFT_SIZE,
            sample_rate_hz: super::audio_constants::SAMPLE_RATE_HZ as f64,
        }
    }
}

impl AnalysisConfig {
    /// Frequency spacing between adjacent bins (Hz)
    pub fn bin_step_hz(&self) -> f64 {
        self.sample_rate_hz / self.fft_size as f64
    }

    /// Frequency assigned to padding entries
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Number of frames produced for an input of `len` samples
    pub fn frame_count(&self, len: usize) -> usize {
        len.div_ceil(self.hop_size)
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), String> {
        if !self.fft_size.is_power_of_two() {
            return Err(format!(
                "FFT size must be power of 2, got {}",
                self.fft_size
            ));
        }
        if self.window_size == 0 || self.window_size > self.fft_size {
            return Err(format!(
                "Window size must be in 1..={}, got {}",
                self.fft_size, self.window_size
            ));
        }
        if self.hop_size == 0 || self.hop_size > self.fft_size {
            return Err(format!(
                "Hop size must be in 1..={}, got {}",
                self.fft_size, self.hop_size
            ));
        }
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err("Sample rate must be > 0".to_string());
        }
        Ok(())
    }
}

/// Reference framing constants
pub mod analysis_constants {
    /// Samples advanced between frames
    pub const HOP_SIZE: usize = 1024;

    /// Hann window length (2 hops)
    pub const WINDOW_SIZE: usize = 2 * HOP_SIZE;

    /// Zero-padded transform length (4 windows)
    pub const FFT_SIZE: usize = 4 * WINDOW_SIZE;
}
