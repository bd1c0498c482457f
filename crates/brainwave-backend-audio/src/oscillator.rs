//! Sine oscillator primitives.
//!
//! Phase is computed directly from the shared time axis (`2π f t`) rather
//! than accumulated, so every sample is independent of the ones before it
//! and channels rendered from the same axis never drift apart.

/// 2π.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Returns `sin(2π f t)`.
#[inline]
pub fn sine_at(frequency: f64, t: f64) -> f64 {
    (TWO_PI * frequency * t).sin()
}

/// Renders `amplitude * sin(2π f t)` over a time axis.
pub fn sine_wave(frequency: f64, amplitude: f64, times: &[f64]) -> Vec<f64> {
    times
        .iter()
        .map(|&t| amplitude * sine_at(frequency, t))
        .collect()
}
