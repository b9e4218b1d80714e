//! Hann analysis window.

/// Precomputed raised-cosine coefficients.
///
/// Uses `0.5 * (1 - cos(2π(i+1)/(L+1)))`, which never touches zero at either
/// edge. Built once at startup and shared by every frame of every recording.
#[derive(Debug, Clone)]
pub struct HannWindow {
    coefficients: Vec<f64>,
}

impl HannWindow {
    pub fn new(len: usize) -> Self {
        let denom = (len + 1) as f64;
        let coefficients = (0..len)
            .map(|i| 0.5 * (1.0 - (2.0 * std::f64::consts::PI * (i + 1) as f64 / denom).cos()))
            .collect();
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Multiply the head of `buf` by the window; samples past the window are untouched
    pub fn apply<T>(&self, buf: &mut [T])
    where
        T: std::ops::MulAssign<f64>,
    {
        for (x, &w) in buf.iter_mut().zip(self.coefficients.iter()) {
            *x *= w;
        }
    }
}
