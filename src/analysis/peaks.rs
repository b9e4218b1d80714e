//! Spectral peak picking and voice assignment.

/// One ranked spectral peak for one frame and one voice slot
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Entry {
    pub frequency: f64,
    pub amplitude: f64,
}

impl Entry {
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    /// Padding entry used when a frame has fewer than N peaks
    pub fn sentinel(nyquist_hz: f64) -> Self {
        Self::new(nyquist_hz, 0.0)
    }
}

/// Find local maxima in a magnitude spectrum of an `nfft`-point transform.
///
/// Scans bins `1..nfft/2` so DC, Nyquist and the negative-frequency mirror are
/// never reported. A bin is a peak when it is strictly above its left
/// neighbour and at least its right neighbour, so a plateau yields one peak
/// at its first bin. Returns `(magnitude, frequency)` pairs in bin order.
pub fn find_peaks(magnitudes: &[f64], nfft: usize, sample_rate_hz: f64) -> Vec<(f64, f64)> {
    let bin_step = sample_rate_hz / nfft as f64;
    let upper = (nfft / 2).min(magnitudes.len().saturating_sub(1));

    (1..upper)
        .filter(|&j| magnitudes[j] > magnitudes[j - 1] && magnitudes[j] >= magnitudes[j + 1])
        .map(|j| (magnitudes[j], j as f64 * bin_step))
        .collect()
}

/// Reduce one frame's spectrum to exactly `voices` entries.
///
/// Peaks are ranked by magnitude (ties keep the lower bin first), the top
/// `voices` are kept, missing slots are filled with Nyquist sentinels, and the
/// result is re-sorted by ascending frequency: voice 0 always receives the
/// lowest chosen frequency.
pub fn extract_peaks(
    magnitudes: &[f64],
    nfft: usize,
    sample_rate_hz: f64,
    voices: usize,
) -> Vec<Entry> {
    let mut peaks = find_peaks(magnitudes, nfft, sample_rate_hz);

    // Rank by magnitude, descending
    peaks.sort_by(|a, b| b.0.total_cmp(&a.0));

    // Sentinel sits at Nyquist so real peaks always sort ahead of it
    let sentinel = Entry::sentinel(sample_rate_hz / 2.0);
    let mut entries: Vec<Entry> = peaks
        .iter()
        .take(voices)
        .map(|&(amplitude, frequency)| Entry::new(frequency, amplitude))
        .collect();
    entries.resize(voices, sentinel);

    // Voice assignment: low to high in frequency
    entries.sort_by(|a, b| a.frequency.total_cmp(&b.frequency));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const NFFT: usize = 16;
    const RATE: f64 = 1600.0; // 100 Hz per bin

    fn spectrum(values: &[f64]) -> Vec<f64> {
        let mut mags = vec![0.0; NFFT];
        mags[..values.len()].copy_from_slice(values);
        mags
    }

    #[test]
    fn test_plateau_reports_first_bin_only() {
        let mags = spectrum(&[0.0, 1.0, 3.0, 3.0, 3.0, 1.0, 0.0, 0.0, 0.0]);
        let peaks = find_peaks(&mags, NFFT, RATE);

        assert_eq!(peaks, vec![(3.0, 200.0)]);
    }

    #[test]
    fn test_excludes_dc_and_nyquist() {
        // Largest values at DC and Nyquist (bin 8) are not candidates
        let mags = spectrum(&[9.0, 1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 9.0]);
        let peaks = find_peaks(&mags, NFFT, RATE);

        assert!(peaks.is_empty());
    }

    #[test]
    fn test_more_peaks_than_voices() {
        // Peaks at bins 1 (5.0), 3 (2.0), 5 (7.0), 7 (4.0)
        let mags = spectrum(&[0.0, 5.0, 1.0, 2.0, 1.0, 7.0, 1.0, 4.0, 0.0]);
        let entries = extract_peaks(&mags, NFFT, RATE, 2);

        // Top two by magnitude, then sorted by frequency
        assert_eq!(entries, vec![Entry::new(100.0, 5.0), Entry::new(500.0, 7.0)]);
    }

    #[test]
    fn test_exactly_as_many_peaks_as_voices() {
        let mags = spectrum(&[0.0, 5.0, 1.0, 2.0, 1.0, 7.0, 1.0, 4.0, 0.0]);
        let entries = extract_peaks(&mags, NFFT, RATE, 4);

        let freqs: Vec<f64> = entries.iter().map(|e| e.frequency).collect();
        assert_eq!(freqs, vec![100.0, 300.0, 500.0, 700.0]);
        assert!(entries.iter().all(|e| e.amplitude > 0.0));
    }

    #[test]
    fn test_fewer_peaks_pads_with_sentinels() {
        let mags = spectrum(&[0.0, 0.0, 0.0, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let entries = extract_peaks(&mags, NFFT, RATE, 3);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], Entry::new(300.0, 6.0));
        assert_eq!(entries[1], Entry::sentinel(800.0));
        assert_eq!(entries[2], Entry::sentinel(800.0));
    }

    #[test]
    fn test_silent_frame_is_all_sentinels() {
        let mags = vec![0.0; NFFT];
        let entries = extract_peaks(&mags, NFFT, RATE, 4);

        assert_eq!(entries, vec![Entry::sentinel(800.0); 4]);
    }

    #[test]
    fn test_output_sorted_by_frequency() {
        let mags: Vec<f64> = (0..NFFT)
            .map(|i| if i % 2 == 1 { (NFFT - i) as f64 } else { 0.0 })
            .collect();
        for voices in 1..8 {
            let entries = extract_peaks(&mags, NFFT, RATE, voices);
            assert_eq!(entries.len(), voices);
            assert!(entries.windows(2).all(|w| w[0].frequency <= w[1].frequency));
        }
    }
}
