//! Peakmorph library - sinusoidal analysis and additive resynthesis

pub mod analysis;
pub mod audio;
pub mod cli;
pub mod error;
pub mod input;
pub mod params;
pub mod session;
pub mod synth;

pub use error::{MorphError, MorphResult};
