//! Linear fade envelope.
//!
//! Every tone is shaped by a fade-in / sustain / fade-out gain curve:
//!
//! ```text
//! gain
//! 1.0 |     ___________________
//!     |    /                   \
//!     |   /                     \
//! 0.0 |__/                       \__
//!       [0, A)   [A, N-D)   [N-D, N)
//! ```
//!
//! When the requested attack and decay do not fit in the signal, both are
//! scaled down proportionally: `A' = round(A * N / (A + D))`, `D' = N - A'`.

use brainwave_spec::FadeSpec;
use log::{trace, warn};

use crate::error::{AudioError, AudioResult};

/// Fade-in and fade-out times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// Fade-in time in seconds.
    pub attack: f64,
    /// Fade-out time in seconds.
    pub decay: f64,
}

impl Default for Fade {
    fn default() -> Self {
        Self {
            attack: 0.1,
            decay: 0.1,
        }
    }
}

impl Fade {
    /// No fade: full gain from the first to the last sample.
    pub const NONE: Fade = Fade {
        attack: 0.0,
        decay: 0.0,
    };

    /// Creates a fade.
    pub fn new(attack: f64, decay: f64) -> Self {
        Self { attack, decay }
    }

    /// Creates a symmetric fade.
    pub fn symmetric(seconds: f64) -> Self {
        Self::new(seconds, seconds)
    }
}

impl From<FadeSpec> for Fade {
    fn from(spec: FadeSpec) -> Self {
        Self::new(spec.attack, spec.decay)
    }
}

/// Fade lengths resolved to samples for a given signal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeSamples {
    /// Attack length in samples.
    pub attack: usize,
    /// Decay length in samples.
    pub decay: usize,
    /// True if the requested lengths were scaled down to fit.
    pub clipped: bool,
}

impl FadeSamples {
    /// Resolves fade times against a signal of `len` samples.
    pub fn resolve(len: usize, sample_rate: u32, fade: Fade) -> AudioResult<Self> {
        let attack = seconds_to_samples("attack", fade.attack, sample_rate)?;
        let decay = seconds_to_samples("decay", fade.decay, sample_rate)?;

        // Compared in f64: huge finite fades must not overflow usize
        if attack + decay <= len as f64 {
            return Ok(Self {
                attack: attack as usize,
                decay: decay as usize,
                clipped: false,
            });
        }

        let attack_share = if (attack + decay).is_finite() {
            attack / (attack + decay)
        } else {
            let (a, d) = (fade.attack * 0.5, fade.decay * 0.5);
            a / (a + d)
        };
        let scaled_attack = ((attack_share * len as f64).round() as usize).min(len);
        let resolved = Self {
            attack: scaled_attack,
            decay: len - scaled_attack,
            clipped: true,
        };
        warn!(
            "fade of {attack}+{decay} samples exceeds signal length {len}; clipped to {}+{}",
            resolved.attack, resolved.decay
        );
        Ok(resolved)
    }
}

/// Rounded sample count for a fade time, kept in f64.
fn seconds_to_samples(name: &str, seconds: f64, sample_rate: u32) -> AudioResult<f64> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(AudioError::invalid_param(
            name,
            format!("must be a non-negative finite time, got {seconds}"),
        ));
    }
    Ok((seconds * sample_rate as f64).round())
}

/// Generates a fade envelope of `len` samples.
///
/// # Returns
/// Vector of gains in [0.0, 1.0]. The first sample is 0.0 when there is an
/// attack, the last is 0.0 when there is a decay.
pub fn fade_envelope(len: usize, sample_rate: u32, fade: Fade) -> AudioResult<Vec<f64>> {
    let FadeSamples { attack, decay, .. } = FadeSamples::resolve(len, sample_rate, fade)?;
    trace!("fade envelope: len={len} attack={attack} decay={decay}");

    let decay_start = len - decay;
    let envelope = (0..len)
        .map(|i| {
            if i < attack {
                i as f64 / attack as f64
            } else if i >= decay_start {
                (len - 1 - i) as f64 / decay as f64
            } else {
                1.0
            }
        })
        .collect();

    Ok(envelope)
}

/// Multiplies a signal by an envelope, sample by sample.
pub fn apply_envelope(signal: &[f64], envelope: &[f64]) -> AudioResult<Vec<f64>> {
    if signal.len() != envelope.len() {
        return Err(AudioError::length_mismatch(signal.len(), envelope.len()));
    }
    Ok(signal.iter().zip(envelope).map(|(s, g)| s * g).collect())
}

/// Generates a fade envelope for `signal` and applies it.
pub fn apply_fade(mut signal: Vec<f64>, sample_rate: u32, fade: Fade) -> AudioResult<Vec<f64>> {
    if fade == Fade::NONE {
        return Ok(signal);
    }
    let envelope = fade_envelope(signal.len(), sample_rate, fade)?;
    for (sample, gain) in signal.iter_mut().zip(&envelope) {
        *sample *= gain;
    }
    Ok(signal)
}
