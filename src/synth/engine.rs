//! Interpolating additive resynthesis over an analysis table.
//!
//! Runs inside the real-time callback: every call is O(voices), takes no
//! locks and never allocates.

use std::sync::Arc;

use super::oscillator::Sine;
use super::sine_table::SineTable;
use crate::analysis::AnalysisTable;
use crate::error::{MorphError, MorphResult};

/// Bracketing frames and blend weights for one sample position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePosition {
    pub low: usize,
    pub high: usize,
    pub lower_weight: f64,
    pub upper_weight: f64,
}

/// Looping oscillator bank driven by table frames
#[derive(Debug)]
pub struct ResynthesisEngine {
    /// Table that drives the oscillators
    primary: AnalysisTable,
    /// Analyzed and normalized, only bounds the loop length
    secondary: AnalysisTable,
    oscillators: Vec<Sine>,
    /// Running sample counter in `[0, sample_limit)`
    position: usize,
    sample_limit: usize,
    frame_limit: usize,
}

impl ResynthesisEngine {
    /// Build an engine over two normalized tables.
    ///
    /// The loop covers the shorter table: `min(frames) * hop_size` samples.
    pub fn new(
        primary: AnalysisTable,
        secondary: AnalysisTable,
        hop_size: usize,
        sine_table: Arc<SineTable>,
        sample_rate_hz: f64,
    ) -> MorphResult<Self> {
        let voices = primary.voices();
        if voices == 0 || secondary.voices() != voices {
            return Err(MorphError::InvalidConfig(format!(
                "voice counts must match and be > 0, got {} and {}",
                voices,
                secondary.voices()
            )));
        }
        if hop_size == 0 {
            return Err(MorphError::InvalidConfig("Hop size must be > 0".to_string()));
        }

        let frame_limit = primary.frame_count().min(secondary.frame_count());
        if frame_limit == 0 {
            return Err(MorphError::InvalidConfig(
                "both recordings need at least one analysis frame".to_string(),
            ));
        }

        let oscillators = (0..voices)
            .map(|_| Sine::new(Arc::clone(&sine_table), sample_rate_hz))
            .collect();

        Ok(Self {
            primary,
            secondary,
            oscillators,
            position: 0,
            sample_limit: frame_limit * hop_size,
            frame_limit,
        })
    }

    pub fn voices(&self) -> usize {
        self.oscillators.len()
    }

    pub fn primary(&self) -> &AnalysisTable {
        &self.primary
    }

    pub fn secondary(&self) -> &AnalysisTable {
        &self.secondary
    }

    pub fn oscillators(&self) -> &[Sine] {
        &self.oscillators
    }

    /// Current sample counter
    pub fn position(&self) -> usize {
        self.position
    }

    /// Samples in one loop (`s_limit`)
    pub fn loop_len(&self) -> usize {
        self.sample_limit
    }

    /// Frames available to playback (`frame_limit`)
    pub fn frame_limit(&self) -> usize {
        self.frame_limit
    }

    /// Move the sample counter, wrapping into the loop
    pub fn seek(&mut self, position: usize) {
        self.position = position % self.sample_limit;
    }

    /// Map the current counter to its bracketing frames.
    ///
    /// Both indices are clamped to the last frame, so the final hop holds
    /// that frame's values instead of reading past the table.
    pub fn frame_position(&self) -> FramePosition {
        let t = self.position as f64 / self.sample_limit as f64 * self.frame_limit as f64;
        let last = self.frame_limit - 1;
        let floor = t as usize;
        let low = floor.min(last);
        let high = (floor + 1).min(last);
        let upper_weight = t - low as f64;

        FramePosition {
            low,
            high,
            lower_weight: 1.0 - upper_weight,
            upper_weight,
        }
    }

    /// Produce one mono sample and advance the counter
    pub fn next_sample(&mut self) -> f64 {
        let FramePosition {
            low,
            high,
            lower_weight,
            upper_weight,
        } = self.frame_position();

        let low_frame = self.primary.frame(low);
        let high_frame = self.primary.frame(high);

        let mut sum = 0.0;
        for ((osc, lo), hi) in self
            .oscillators
            .iter_mut()
            .zip(low_frame.iter())
            .zip(high_frame.iter())
        {
            let freq = lower_weight * lo.frequency + upper_weight * hi.frequency;
            let amp = lower_weight * lo.amplitude + upper_weight * hi.amplitude;
            osc.set_frequency(freq);
            sum += amp * osc.next_sample();
        }

        // Fixed headroom: divide by voice count
        let out = sum / self.oscillators.len() as f64;

        self.position += 1;
        if self.position == self.sample_limit {
            self.position = 0;
        }
        out
    }

    /// Fill an interleaved buffer, duplicating each mono sample to every channel
    pub fn fill_interleaved(&mut self, out: &mut [f32], channels: usize) {
        for frame in out.chunks_mut(channels.max(1)) {
            let value = self.next_sample() as f32;
            frame.fill(value);
        }
    }
}
