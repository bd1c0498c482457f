//! Mixer for combining weighted tone signals.

use brainwave_spec::FrequencySpec;
use log::{debug, warn};

use crate::envelope::{apply_fade, Fade};
use crate::error::{AudioError, AudioResult};
use crate::signal::{RenderSettings, Signal};
use crate::tones::{PureTone, Synthesizer};

use super::processing::exceeds_unit_range;

/// Accumulates equal-length signals with per-signal weights.
#[derive(Debug)]
pub struct Mixer<'a> {
    /// Required length of every signal.
    num_samples: usize,
    /// Borrowed signals and their weights.
    layers: Vec<(&'a [f64], f64)>,
}

impl<'a> Mixer<'a> {
    /// Creates a mixer for signals of `num_samples` samples.
    pub fn new(num_samples: usize) -> Self {
        Self {
            num_samples,
            layers: Vec::new(),
        }
    }

    /// Adds a signal with a mixing weight.
    pub fn add(&mut self, samples: &'a [f64], weight: f64) -> AudioResult<()> {
        if samples.len() != self.num_samples {
            return Err(AudioError::length_mismatch(self.num_samples, samples.len()));
        }
        if !weight.is_finite() {
            return Err(AudioError::invalid_param(
                "weight",
                format!("must be finite, got {weight}"),
            ));
        }
        self.layers.push((samples, weight));
        Ok(())
    }

    /// Number of signals added so far.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.layers.iter().map(|(_, w)| w).sum()
    }

    /// Sums all layers: `out[i] = Σ weight_k * signal_k[i]`.
    pub fn mix(&self) -> AudioResult<Signal> {
        if self.layers.is_empty() {
            return Err(AudioError::ArityMismatch {
                signals: 0,
                weights: 0,
            });
        }

        let mut output = vec![0.0; self.num_samples];
        for (samples, weight) in &self.layers {
            for (out, &sample) in output.iter_mut().zip(samples.iter()) {
                *out += sample * weight;
            }
        }

        if exceeds_unit_range(&output) {
            warn!(
                "mix of {} layers (total weight {}) exceeds [-1, 1]; left for the encoder to clip",
                self.layers.len(),
                self.total_weight()
            );
        }
        Ok(output)
    }
}

/// Mixes signals with per-signal weights.
///
/// # Arguments
/// * `signals` - Equal-length mono signals
/// * `weights` - One weight per signal; not required to sum to 1
///
/// # Returns
/// The weighted sum, without normalization or clipping
pub fn mix(signals: &[Signal], weights: &[f64]) -> AudioResult<Signal> {
    if signals.is_empty() || signals.len() != weights.len() {
        return Err(AudioError::ArityMismatch {
            signals: signals.len(),
            weights: weights.len(),
        });
    }
    debug!("mixing {} signals of {} samples", signals.len(), signals[0].len());

    let mut mixer = Mixer::new(signals[0].len());
    for (signal, &weight) in signals.iter().zip(weights) {
        mixer.add(signal, weight)?;
    }
    mixer.mix()
}

/// Mixes signals, then applies one global fade to the result.
pub fn mix_with_fade(
    signals: &[Signal],
    weights: &[f64],
    fade: Fade,
    sample_rate: u32,
) -> AudioResult<Signal> {
    let mixed = mix(signals, weights)?;
    apply_fade(mixed, sample_rate, fade)
}

/// Mixes unit-amplitude tones at the given frequencies.
///
/// Tones are rendered without a fade; the settings' fade is applied once to
/// the mixed result. When `amplitudes` is `None` every tone gets an equal
/// `1/n` weight.
///
/// # Example
/// ```
/// use brainwave_backend_audio::{mix_solfeggio_frequencies, RenderSettings};
/// use brainwave_spec::SolfeggioFrequency::{La, Sol, Ut};
///
/// let settings = RenderSettings::new(1.0);
/// let mixed = mix_solfeggio_frequencies([Ut, Sol, La], Some(&[0.33, 0.33, 0.34]), &settings).unwrap();
/// assert_eq!(mixed.len(), 44100);
/// ```
pub fn mix_solfeggio_frequencies<F>(
    frequencies: impl IntoIterator<Item = F>,
    amplitudes: Option<&[f64]>,
    settings: &RenderSettings,
) -> AudioResult<Signal>
where
    F: Into<FrequencySpec>,
{
    let frequencies = frequencies
        .into_iter()
        .map(|f| f.into().resolve())
        .collect::<Result<Vec<f64>, _>>()?;

    let weights = match amplitudes {
        Some(amplitudes) => amplitudes.to_vec(),
        None if frequencies.is_empty() => Vec::new(),
        None => vec![1.0 / frequencies.len() as f64; frequencies.len()],
    };
    if frequencies.is_empty() || frequencies.len() != weights.len() {
        return Err(AudioError::ArityMismatch {
            signals: frequencies.len(),
            weights: weights.len(),
        });
    }
    debug!("mixing tones at {frequencies:?} Hz with weights {weights:?}");

    let unfaded = settings.without_fade();
    let tones = frequencies
        .iter()
        .map(|&f| PureTone::new(f, 1.0).generate(&unfaded))
        .collect::<AudioResult<Vec<Signal>>>()?;

    mix_with_fade(&tones, &weights, settings.fade, settings.sample_rate)
}
