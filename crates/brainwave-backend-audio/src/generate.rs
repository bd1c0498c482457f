//! Main entry point for recipe rendering.
//!
//! This module takes render params and produces a signal deterministically:
//! identical params always yield bit-identical samples and the same
//! [`RenderResult::signal_hash`].

use brainwave_spec::{RenderParams, ToneRecipe};
use log::debug;

use crate::binaural::BinauralBeat;
use crate::error::AudioResult;
use crate::mixer::{mix_solfeggio_frequencies, peak};
use crate::signal::{RenderSettings, Signal, StereoSignal};
use crate::tones::{IsochronicTone, MonauralBeat, PureTone, Synthesizer};

/// Rendered samples, one or two channels.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutput {
    /// Single-channel output.
    Mono(Signal),
    /// Two sample-aligned channels.
    Stereo(StereoSignal),
}

impl RenderOutput {
    /// Number of channels.
    pub fn channels(&self) -> u16 {
        match self {
            RenderOutput::Mono(_) => 1,
            RenderOutput::Stereo(_) => 2,
        }
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        match self {
            RenderOutput::Mono(samples) => samples.len(),
            RenderOutput::Stereo(stereo) => stereo.len(),
        }
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples in channel order (`L R L R ...` for stereo).
    pub fn interleaved(&self) -> Vec<f64> {
        match self {
            RenderOutput::Mono(samples) => samples.clone(),
            RenderOutput::Stereo(stereo) => stereo.interleave(),
        }
    }
}

/// Result of rendering one recipe.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Rendered samples.
    pub output: RenderOutput,
    /// Recipe type tag.
    pub recipe_kind: &'static str,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples per channel.
    pub num_samples: usize,
    /// BLAKE3 hash of the little-endian f64 samples, interleaved for stereo.
    pub signal_hash: String,
}

impl RenderResult {
    fn new(output: RenderOutput, recipe_kind: &'static str, sample_rate: u32) -> Self {
        let signal_hash = signal_hash(&output.interleaved());
        Self {
            num_samples: output.len(),
            output,
            recipe_kind,
            sample_rate,
            signal_hash,
        }
    }

    /// Output duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Summary of the render for reports.
    pub fn metadata(&self) -> serde_json::Value {
        serde_json::json!({
            "recipe": self.recipe_kind,
            "sample_rate": self.sample_rate,
            "num_samples": self.num_samples,
            "channels": self.output.channels(),
            "peak": peak(&self.output.interleaved()),
            "signal_hash": self.signal_hash,
        })
    }
}

/// Hashes samples as `hex(BLAKE3(f64 little-endian bytes))`.
pub fn signal_hash(samples: &[f64]) -> String {
    let mut hasher = blake3::Hasher::new();
    for sample in samples {
        hasher.update(&sample.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// Renders a recipe.
///
/// # Arguments
/// * `params` - Duration, sample rate, fade, and tone recipe
///
/// # Returns
/// Rendered samples and metadata
pub fn render(params: &RenderParams) -> AudioResult<RenderResult> {
    let settings = RenderSettings::from(params);
    let kind = params.recipe.kind();
    debug!(
        "rendering {kind}: {} s at {} Hz, fade {:?}",
        settings.duration_seconds, settings.sample_rate, settings.fade
    );

    let output = match &params.recipe {
        ToneRecipe::PureTone {
            frequency,
            amplitude,
        } => {
            let tone = PureTone::new(frequency.resolve()?, *amplitude);
            RenderOutput::Mono(tone.generate(&settings)?)
        }
        ToneRecipe::MonauralBeat {
            frequency1,
            frequency2,
            amplitude,
        } => {
            let beat = MonauralBeat::new(*frequency1, *frequency2, *amplitude);
            RenderOutput::Mono(beat.generate(&settings)?)
        }
        ToneRecipe::IsochronicTone {
            frequency,
            pulse_rate,
            duty_cycle,
            amplitude,
            edge_fade,
        } => {
            let mut tone =
                IsochronicTone::new(frequency.resolve()?, *pulse_rate, *duty_cycle, *amplitude);
            if let Some(seconds) = edge_fade {
                tone = tone.with_edge_fade(*seconds);
            }
            RenderOutput::Mono(tone.generate(&settings)?)
        }
        ToneRecipe::BinauralBeat {
            base_frequency,
            beat_frequency,
            amplitude,
            carrier_frequency,
        } => {
            let mut beat = BinauralBeat::new(*base_frequency, beat_frequency.hz(), *amplitude);
            if let Some(carrier) = carrier_frequency {
                beat = beat.with_carrier(*carrier);
            }
            RenderOutput::Stereo(beat.generate(&settings)?)
        }
        ToneRecipe::SolfeggioBinaural {
            solfeggio,
            beat_frequency,
            amplitude,
        } => {
            let beat = BinauralBeat::new(solfeggio.resolve()?, beat_frequency.hz(), *amplitude);
            RenderOutput::Stereo(beat.generate(&settings)?)
        }
        ToneRecipe::Mix {
            frequencies,
            weights,
        } => RenderOutput::Mono(mix_solfeggio_frequencies(
            frequencies.iter().cloned(),
            weights.as_deref(),
            &settings,
        )?),
    };

    let result = RenderResult::new(output, kind, settings.sample_rate);
    debug!(
        "rendered {kind}: {} samples x {} channels, hash {}",
        result.num_samples,
        result.output.channels(),
        result.signal_hash
    );
    Ok(result)
}

/// Parses render params from JSON and renders them.
pub fn render_json(json: &str) -> AudioResult<RenderResult> {
    let params = RenderParams::from_json(json)?;
    render(&params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;
    use crate::tones::generate_pure_tone;
    use brainwave_spec::{FrequencySpec, SolfeggioFrequency};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_pure_tone_matches_generator() {
        let params = RenderParams::new(
            0.5,
            ToneRecipe::PureTone {
                frequency: SolfeggioFrequency::La.into(),
                amplitude: 0.3,
            },
        )
        .with_sample_rate(8000);

        let result = render(&params).unwrap();
        let direct = generate_pure_tone(528.0, 0.3, &RenderSettings::from(&params)).unwrap();

        assert_eq!(result.recipe_kind, "pure_tone");
        assert_eq!(result.num_samples, 4000);
        assert_eq!(result.output, RenderOutput::Mono(direct));
        assert_eq!(result.duration_seconds(), 0.5);
    }

    #[test]
    fn test_render_binaural_is_stereo() {
        let result = render_json(
            r#"{
                "duration_seconds": 0.25,
                "sample_rate": 8000,
                "recipe": {"type": "binaural_beat", "base_frequency": 200.0, "beat_frequency": "alpha"}
            }"#,
        )
        .unwrap();

        assert_eq!(result.output.channels(), 2);
        assert_eq!(result.num_samples, 2000);
        match result.output {
            RenderOutput::Stereo(stereo) => assert!(!stereo.is_mono()),
            other => panic!("expected stereo, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let json = r#"{
            "duration_seconds": 0.2,
            "sample_rate": 8000,
            "recipe": {"type": "isochronic_tone", "frequency": "SOL", "pulse_rate": 10.0}
        }"#;
        let a = render_json(json).unwrap();
        let b = render_json(json).unwrap();
        assert_eq!(a.signal_hash, b.signal_hash);
        assert_eq!(a.signal_hash.len(), 64);
    }

    #[test]
    fn test_different_recipes_hash_differently() {
        let a = render(&RenderParams::new(
            0.1,
            ToneRecipe::PureTone {
                frequency: FrequencySpec::Hz(440.0),
                amplitude: 0.5,
            },
        ))
        .unwrap();
        let b = render(&RenderParams::new(
            0.1,
            ToneRecipe::PureTone {
                frequency: FrequencySpec::Hz(441.0),
                amplitude: 0.5,
            },
        ))
        .unwrap();
        assert_ne!(a.signal_hash, b.signal_hash);
    }

    #[test]
    fn test_signal_hash_uses_le_bytes() {
        let samples = [0.5_f64, -0.25];
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0.5_f64.to_le_bytes());
        bytes.extend_from_slice(&(-0.25_f64).to_le_bytes());
        assert_eq!(signal_hash(&samples), blake3::hash(&bytes).to_hex().to_string());
    }

    #[test]
    fn test_render_mix_with_default_weights() {
        let result = render_json(
            r#"{
                "duration_seconds": 0.1,
                "sample_rate": 8000,
                "fade": {"attack": 0.0, "decay": 0.0},
                "recipe": {"type": "mix", "frequencies": ["UT", 432.0, "la"]}
            }"#,
        )
        .unwrap();

        assert_eq!(result.output.channels(), 1);
        assert_eq!(result.num_samples, 800);
        let metadata = result.metadata();
        assert_eq!(metadata["recipe"], "mix");
        assert_eq!(metadata["channels"], 1);
        assert!(metadata["peak"].as_f64().unwrap() <= 1.0);
    }

    #[test]
    fn test_render_reports_parse_errors() {
        let err = render_json(r#"{"duration_seconds": 1.0}"#).unwrap_err();
        assert!(matches!(err, AudioError::InvalidRecipe { .. }));

        let err = render_json(
            r#"{"duration_seconds": 1.0, "recipe": {"type": "pure_tone", "frequency": "DO"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, AudioError::UnknownFrequencyName { ref name } if name == "DO"));
    }

    #[test]
    fn test_render_rejects_bad_duration() {
        let params = RenderParams::new(
            0.0,
            ToneRecipe::MonauralBeat {
                frequency1: 200.0,
                frequency2: 210.0,
                amplitude: 0.5,
            },
        );
        assert!(matches!(
            render(&params),
            Err(AudioError::InvalidParameter { .. })
        ));
    }
}
