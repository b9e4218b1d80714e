//! Per-recording analysis table and loudness normalization.

use super::peaks::Entry;

/// Frames of exactly `voices` frequency-sorted entries each.
///
/// Stored flat, frame-major, so the fixed frame width is structural.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTable {
    entries: Vec<Entry>,
    voices: usize,
}

impl AnalysisTable {
    /// Empty table whose frames will hold `voices` entries
    pub fn new(voices: usize) -> Self {
        Self {
            entries: Vec::new(),
            voices,
        }
    }

    pub(crate) fn with_capacity(voices: usize, frames: usize) -> Self {
        Self {
            entries: Vec::with_capacity(voices * frames),
            voices,
        }
    }

    /// Append one frame; must contain exactly `voices` entries
    pub(crate) fn push_frame(&mut self, frame: &[Entry]) {
        assert_eq!(
            frame.len(),
            self.voices,
            "frame width must equal voice count"
        );
        self.entries.extend_from_slice(frame);
    }

    pub fn voices(&self) -> usize {
        self.voices
    }

    pub fn frame_count(&self) -> usize {
        if self.voices == 0 {
            0
        } else {
            self.entries.len() / self.voices
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn frame(&self, index: usize) -> &[Entry] {
        let start = index * self.voices;
        &self.entries[start..start + self.voices]
    }

    pub fn frames(&self) -> impl Iterator<Item = &[Entry]> {
        // chunks_exact panics on 0
        self.entries.chunks_exact(self.voices.max(1))
    }

    /// Largest amplitude across every frame and voice
    pub fn peak_amplitude(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.amplitude)
            .fold(0.0, f64::max)
    }

    /// Scale every amplitude so the table's loudest entry is 1.0.
    ///
    /// Returns the divisor used. An all-silent table (peak of zero) is left
    /// unchanged and reports 0.0.
    pub fn normalize(&mut self) -> f64 {
        let peak = self.peak_amplitude();
        if peak > 0.0 {
            for entry in &mut self.entries {
                entry.amplitude /= peak;
            }
        }
        peak
    }
}
