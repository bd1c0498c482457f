//! Signal measurements for verifying rendered tones.
//!
//! These are probes over finished buffers. They never feed back into
//! synthesis.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::oscillator::TWO_PI;

/// Largest absolute sample value.
pub fn peak_amplitude(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |a, &b| a.max(b.abs()))
}

/// Root-mean-square level, 0.0 for an empty buffer.
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Amplitude of the `frequency` component, as a single-bin DFT.
///
/// A sine of amplitude `A` that completes a whole number of cycles over the
/// buffer measures exactly `A`.
pub fn magnitude_at(samples: &[f64], sample_rate: u32, frequency: f64) -> f64 {
    if samples.is_empty() || sample_rate == 0 {
        return 0.0;
    }
    let step = TWO_PI * frequency / sample_rate as f64;
    let (mut re, mut im) = (0.0, 0.0);
    for (i, &s) in samples.iter().enumerate() {
        let angle = step * i as f64;
        re += s * angle.cos();
        im -= s * angle.sin();
    }
    2.0 * (re * re + im * im).sqrt() / samples.len() as f64
}

/// Single-sided amplitude spectrum over the whole buffer.
///
/// # Returns
/// `len / 2 + 1` bins; bin `k` covers `k * sample_rate / len` Hz
pub fn magnitude_spectrum(samples: &[f64]) -> Vec<f64> {
    let n = samples.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);
    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    fft.process(&mut buffer);

    let scale = 2.0 / n as f64;
    buffer[..=n / 2]
        .iter()
        .enumerate()
        .map(|(k, c)| {
            // DC has no mirrored bin
            if k == 0 {
                c.norm() / n as f64
            } else {
                c.norm() * scale
            }
        })
        .collect()
}

/// Frequency of the strongest non-DC bin, or `None` for silence.
pub fn dominant_frequency(samples: &[f64], sample_rate: u32) -> Option<f64> {
    let spectrum = magnitude_spectrum(samples);
    let (bin, magnitude) = spectrum
        .iter()
        .enumerate()
        .skip(1)
        .max_by(|a, b| a.1.total_cmp(b.1))?;

    if *magnitude <= f64::EPSILON {
        return None;
    }
    Some(bin as f64 * sample_rate as f64 / samples.len() as f64)
}

/// Estimates the amplitude-modulation rate of a tone.
///
/// The signal is rectified and smoothed over one carrier period to get its
/// envelope; the envelope's dominant frequency is the beat rate.
///
/// # Arguments
/// * `samples` - Beating or pulsed tone
/// * `sample_rate` - Sample rate in Hz
/// * `carrier_hz` - Carrier frequency used to size the smoothing window
pub fn estimate_beat_rate(samples: &[f64], sample_rate: u32, carrier_hz: f64) -> Option<f64> {
    if samples.is_empty() || carrier_hz.is_nan() || carrier_hz <= 0.0 {
        return None;
    }
    let window = ((sample_rate as f64 / carrier_hz).round() as usize).max(1);
    let mut envelope = moving_average_abs(samples, window);

    let mean = envelope.iter().sum::<f64>() / envelope.len() as f64;
    for e in envelope.iter_mut() {
        *e -= mean;
    }
    dominant_frequency(&envelope, sample_rate)
}

/// Centered moving average of `|samples|`, truncated at the edges.
fn moving_average_abs(samples: &[f64], window: usize) -> Vec<f64> {
    let mut prefix = Vec::with_capacity(samples.len() + 1);
    prefix.push(0.0);
    let mut acc = 0.0;
    for s in samples {
        acc += s.abs();
        prefix.push(acc);
    }

    let half = window / 2;
    (0..samples.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + window - half).min(samples.len());
            (prefix[end] - prefix[start]) / (end - start) as f64
        })
        .collect()
}
