//! One-cycle sine lookup table.

/// Samples of `sin(2πi/n)` for `i` in `0..n`.
///
/// Built once during startup and shared read-only by every oscillator.
#[derive(Debug, Clone)]
pub struct SineTable {
    data: Vec<f64>,
}

impl SineTable {
    pub fn new(size: usize) -> Self {
        let data = (0..size)
            .map(|i| (std::f64::consts::TAU * i as f64 / size as f64).sin())
            .collect();
        Self { data }
    }

    /// Sine of a normalized phase in `[0, 1)`, linearly interpolated between
    /// adjacent table entries (the last entry interpolates toward the first)
    #[inline]
    pub fn lookup(&self, phase: f64) -> f64 {
        let n = self.data.len();
        let pos = phase * n as f64;
        let a = (pos as usize).min(n - 1);
        let b = if a + 1 == n { 0 } else { a + 1 };
        let t = pos - a as f64;
        (1.0 - t) * self.data[a] + t * self.data[b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_points_exact() {
        let table = SineTable::new(16384);

        assert_eq!(table.lookup(0.0), 0.0);
        assert!((table.lookup(0.25) - 1.0).abs() < 1e-12);
        assert!(table.lookup(0.5).abs() < 1e-12);
        assert!((table.lookup(0.75) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_interpolation_error_bound() {
        let table = SineTable::new(16384);

        // Linear interpolation error ≤ (2π/n)² / 8
        let bound = (std::f64::consts::TAU / 16384.0).powi(2) / 8.0 + 1e-12;
        for i in 0..10000 {
            let phase = i as f64 / 10000.0 + 0.3e-5;
            let phase = phase - phase.floor();
            let exact = (std::f64::consts::TAU * phase).sin();
            assert!((table.lookup(phase) - exact).abs() <= bound);
        }
    }

    #[test]
    fn test_wraps_at_last_entry() {
        let table = SineTable::new(4);

        // Between entry 3 (-1.0) and entry 0 (0.0)
        assert!((table.lookup(0.875) + 0.5).abs() < 1e-12);
    }
}
