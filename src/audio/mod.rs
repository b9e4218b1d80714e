//! Audio output: real-time playback and offline render.

mod render;
mod system;

// Re-export public types
pub use render::render_to_wav;
pub use system::AudioSystem;
