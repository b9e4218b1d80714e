//! Frame-by-frame analysis of one recording.

use rustfft::num_complex::Complex64;

use super::fft::fft;
use super::peaks::extract_peaks;
use super::table::AnalysisTable;
use super::window::HannWindow;
use crate::error::{MorphError, MorphResult};
use crate::params::AnalysisConfig;

/// Drives windowing, transform and peak extraction over a sample sequence
pub struct Analyzer {
    config: AnalysisConfig,
    window: HannWindow,
}

impl Analyzer {
    /// Validate the configuration and precompute the window
    pub fn new(config: AnalysisConfig) -> MorphResult<Self> {
        config.validate().map_err(MorphError::InvalidConfig)?;
        let window = HannWindow::new(config.window_size);
        Ok(Self { config, window })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Produce `ceil(len / hop)` frames of `voices` peaks each.
    ///
    /// Each frame starts from a zeroed FFT buffer holding only that frame's
    /// hop of input; nothing carries over from the previous frame.
    pub fn analyze(&self, samples: &[f32], voices: usize) -> AnalysisTable {
        let AnalysisConfig {
            hop_size,
            fft_size,
            sample_rate_hz,
            ..
        } = self.config;

        let frame_count = self.config.frame_count(samples.len());
        let mut table = AnalysisTable::with_capacity(voices, frame_count);
        let mut buf = vec![Complex64::new(0.0, 0.0); fft_size];
        let mut magnitudes = vec![0.0f64; fft_size / 2 + 1];

        for hop in samples.chunks(hop_size) {
            // Fresh zero-padded buffer per frame
            buf.fill(Complex64::new(0.0, 0.0));
            for (slot, &x) in buf.iter_mut().zip(hop.iter()) {
                slot.re = x as f64;
            }

            self.window.apply(&mut buf);
            fft(&mut buf);

            for (mag, bin) in magnitudes.iter_mut().zip(buf.iter()) {
                *mag = bin.norm();
            }

            let frame = extract_peaks(&magnitudes, fft_size, sample_rate_hz, voices);
            table.push_frame(&frame);
        }

        table
    }

    /// Analyze, then scale the table to unit peak amplitude
    pub fn analyze_normalized(&self, samples: &[f32], voices: usize) -> AnalysisTable {
        let mut table = self.analyze(samples, voices);
        let peak = table.normalize();
        log::debug!(
            "analyzed {} frames x {} voices, peak amplitude {:.3}",
            table.frame_count(),
            voices,
            peak
        );
        table
    }
}
