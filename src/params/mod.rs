//! Parameter definitions with physical units and documented semantics.
//!
//! Framing sizes, engine rate and table sizes live here as named constants
//! instead of literals scattered through the pipeline.

mod analysis;
mod audio;
mod render;

// Re-export all types
pub use analysis::{analysis_constants, AnalysisConfig};
pub use audio::{audio_constants, EngineConfig};
pub use render::RenderConfig;
