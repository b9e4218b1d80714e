//! Short-time spectral analysis.
//!
//! Windowed FFT per hop, peak picking, and per-recording loudness
//! normalization into an [`AnalysisTable`].

mod fft;
mod peaks;
mod pipeline;
mod table;
mod window;

pub use fft::{fft, ifft};
pub use peaks::{extract_peaks, find_peaks, Entry};
pub use pipeline::Analyzer;
pub use table::AnalysisTable;
pub use window::HannWindow;
