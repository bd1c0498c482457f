//! Opt-in level helpers for mixed signals.
//!
//! Nothing here runs implicitly. The mixer leaves out-of-range samples for
//! the caller or the external encoder to deal with.

/// Largest absolute sample value, 0.0 for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Returns true if any sample falls outside [-1.0, 1.0].
pub fn exceeds_unit_range(samples: &[f64]) -> bool {
    samples.iter().any(|s| s.abs() > 1.0)
}

/// Scales samples so the peak lands at `headroom_db` below full scale.
///
/// # Arguments
/// * `samples` - Samples to normalize in place
/// * `headroom_db` - Target peak in dBFS (e.g., -3.0 for -3dB headroom)
pub fn normalize(samples: &mut [f64], headroom_db: f64) {
    let target_peak = 10.0_f64.powf(headroom_db / 20.0);
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Clamps samples to [-1.0, 1.0].
///
/// # Returns
/// Number of samples that were clamped
pub fn hard_clip(samples: &mut [f64]) -> usize {
    let mut clipped = 0;
    for sample in samples.iter_mut() {
        if sample.abs() > 1.0 {
            *sample = sample.clamp(-1.0, 1.0);
            clipped += 1;
        }
    }
    clipped
}

/// Compresses samples above `threshold` toward 1.0 with an exponential knee.
///
/// # Arguments
/// * `sample` - Input sample
/// * `threshold` - Level where compression begins (0.0 to 1.0)
#[inline]
pub fn soft_clip(sample: f64, threshold: f64) -> f64 {
    let abs = sample.abs();
    if abs <= threshold {
        sample
    } else {
        let excess = abs - threshold;
        let compressed = threshold + (1.0 - threshold) * (1.0 - (-excess * 3.0).exp());
        sample.signum() * compressed
    }
}

/// Applies [`soft_clip`] to every sample.
pub fn soft_clip_buffer(samples: &mut [f64], threshold: f64) {
    for sample in samples.iter_mut() {
        *sample = soft_clip(*sample, threshold);
    }
}
