//! Additive resynthesis: sine table, oscillators and the looping engine.

mod engine;
mod oscillator;
mod sine_table;

pub use engine::{FramePosition, ResynthesisEngine};
pub use oscillator::{Phasor, Sine};
pub use sine_table::SineTable;
