//! Recursive radix-2 FFT.

use rustfft::num_complex::Complex64;
use std::f64::consts::PI;

/// Forward DFT in place.
///
/// Even/odd decimation with twiddle `exp(-2πik/N)`. The length must be a power
/// of two; lengths ≤ 1 are returned unchanged.
pub fn fft(buf: &mut [Complex64]) {
    let n = buf.len();
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two(), "FFT length must be power of 2, got {}", n);

    // Divide
    let mut even: Vec<Complex64> = buf.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex64> = buf.iter().skip(1).step_by(2).copied().collect();

    // Conquer
    fft(&mut even);
    fft(&mut odd);

    // Combine
    let half = n / 2;
    for k in 0..half {
        let t = Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n as f64) * odd[k];
        buf[k] = even[k] + t;
        buf[k + half] = even[k] - t;
    }
}

/// Inverse DFT in place, scaled by `1/N`.
pub fn ifft(buf: &mut [Complex64]) {
    for x in buf.iter_mut() {
        *x = x.conj();
    }
    fft(buf);
    let scale = 1.0 / buf.len().max(1) as f64;
    for x in buf.iter_mut() {
        *x = x.conj() * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::FftPlanner;

    fn max_error(a: &[Complex64], b: &[Complex64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).norm())
            .fold(0.0, f64::max)
    }

    #[test]
    fn test_trivial_lengths_unchanged() {
        let mut empty: Vec<Complex64> = vec![];
        fft(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![Complex64::new(3.0, -1.0)];
        fft(&mut single);
        assert_eq!(single[0], Complex64::new(3.0, -1.0));
    }

    #[test]
    fn test_matches_rustfft() {
        let n = 256;
        let input: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new((i as f64 * 0.37).sin(), (i as f64 * 0.11).cos()))
            .collect();

        let mut ours = input.clone();
        fft(&mut ours);

        let mut reference = input;
        FftPlanner::<f64>::new()
            .plan_fft_forward(n)
            .process(&mut reference);

        assert!(max_error(&ours, &reference) < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        let input: Vec<Complex64> = (0..1024)
            .map(|i| Complex64::new(((i * 7919) % 101) as f64 / 50.0 - 1.0, 0.0))
            .collect();

        let mut buf = input.clone();
        fft(&mut buf);
        ifft(&mut buf);

        assert!(max_error(&buf, &input) < 1e-10);
    }

    #[test]
    fn test_pure_sinusoid_energy_at_bin_and_mirror() {
        let n = 64;
        let k = 5;
        let mut buf: Vec<Complex64> = (0..n)
            .map(|i| Complex64::new((2.0 * PI * k as f64 * i as f64 / n as f64).cos(), 0.0))
            .collect();
        fft(&mut buf);

        for (bin, x) in buf.iter().enumerate() {
            if bin == k || bin == n - k {
                assert!((x.norm() - n as f64 / 2.0).abs() < 1e-9);
            } else {
                assert!(x.norm() < 1e-9, "leak at bin {}: {}", bin, x.norm());
            }
        }
    }
}
