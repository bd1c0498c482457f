//! Shared discrete time axis.
//!
//! Every generator in one call samples the same axis, so all channels stay
//! sample-aligned.

use crate::error::{AudioError, AudioResult};

pub use brainwave_spec::DEFAULT_SAMPLE_RATE;

/// Longest render accepted, in seconds.
pub const MAX_DURATION_SECONDS: f64 = 3.0 * 60.0 * 60.0;

/// Highest sample rate assumed when bounding buffer sizes, in Hz.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Largest buffer accepted: `MAX_DURATION_SECONDS` at `MAX_SAMPLE_RATE`.
pub const MAX_SAMPLES: usize = 3 * 60 * 60 * MAX_SAMPLE_RATE as usize;

/// Returns the number of samples for a duration: `round(duration * sample_rate)`.
pub fn sample_count(duration_seconds: f64, sample_rate: u32) -> AudioResult<usize> {
    if sample_rate == 0 {
        return Err(AudioError::invalid_param("sample_rate", "must be positive"));
    }
    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(AudioError::invalid_param(
            "duration_seconds",
            format!("must be positive and finite, got {duration_seconds}"),
        ));
    }
    if duration_seconds > MAX_DURATION_SECONDS {
        return Err(AudioError::invalid_param(
            "duration_seconds",
            format!(
                "must be <= {} seconds, got {}",
                MAX_DURATION_SECONDS, duration_seconds
            ),
        ));
    }

    let exact = (duration_seconds * sample_rate as f64).round();
    if exact > MAX_SAMPLES as f64 {
        return Err(AudioError::invalid_param(
            "duration_seconds",
            format!(
                "{duration_seconds} seconds at {sample_rate} Hz needs {exact} samples, limit is {MAX_SAMPLES}"
            ),
        ));
    }

    let num_samples = exact as usize;
    if num_samples == 0 {
        return Err(AudioError::invalid_param(
            "duration_seconds",
            format!("{duration_seconds} seconds is shorter than one sample at {sample_rate} Hz"),
        ));
    }
    Ok(num_samples)
}

/// Builds the time axis `t[i] = i / sample_rate` for `i` in `[0, N)`.
pub fn time_axis(duration_seconds: f64, sample_rate: u32) -> AudioResult<Vec<f64>> {
    let num_samples = sample_count(duration_seconds, sample_rate)?;
    let rate = sample_rate as f64;
    Ok((0..num_samples).map(|i| i as f64 / rate).collect())
}
