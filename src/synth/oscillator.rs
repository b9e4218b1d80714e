//! Phase accumulator and table-lookup sine oscillator.

use std::sync::Arc;

use super::sine_table::SineTable;

/// Rising ramp from 0 to 1, used as the phase source for other oscillators
#[derive(Debug, Clone)]
pub struct Phasor {
    phase: f64,
    increment: f64,
    sample_rate_hz: f64,
}

impl Phasor {
    pub fn new(sample_rate_hz: f64) -> Self {
        Self {
            phase: 0.0,
            increment: 0.0,
            sample_rate_hz,
        }
    }

    pub fn set_frequency(&mut self, hz: f64) {
        self.increment = hz / self.sample_rate_hz;
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Return the current phase, then advance and wrap into `[0, 1)`
    #[inline]
    pub fn advance(&mut self) -> f64 {
        let value = self.phase;
        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase -= self.phase.floor();
        }
        value
    }
}

/// A [`Phasor`] feeding a shared [`SineTable`]
#[derive(Debug, Clone)]
pub struct Sine {
    phasor: Phasor,
    table: Arc<SineTable>,
}

impl Sine {
    pub fn new(table: Arc<SineTable>, sample_rate_hz: f64) -> Self {
        Self {
            phasor: Phasor::new(sample_rate_hz),
            table,
        }
    }

    pub fn set_frequency(&mut self, hz: f64) {
        self.phasor.set_frequency(hz);
    }

    pub fn phasor(&self) -> &Phasor {
        &self.phasor
    }

    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        self.table.lookup(self.phasor.advance())
    }
}
