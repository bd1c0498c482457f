//! Declarative render recipes.
//!
//! A [`RenderParams`] document names one tone recipe plus the shared
//! duration, sample rate, and fade. Recipes are plain JSON:
//!
//! ```
//! use brainwave_spec::{RenderParams, ToneRecipe};
//!
//! let params = RenderParams::from_json(r#"{
//!     "duration_seconds": 2.0,
//!     "recipe": { "type": "binaural_beat", "base_frequency": 200.0, "beat_frequency": "alpha" }
//! }"#).unwrap();
//!
//! assert_eq!(params.sample_rate, 44100);
//! assert!(matches!(params.recipe, ToneRecipe::BinauralBeat { .. }));
//! ```

use serde::{Deserialize, Serialize};

use crate::band::BrainwaveBand;
use crate::error::SpecError;
use crate::solfeggio::SolfeggioFrequency;

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default tone amplitude when a recipe omits it.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Default isochronic duty cycle.
pub const DEFAULT_DUTY_CYCLE: f64 = 0.5;

/// A frequency given either in Hz or as a Solfeggio catalogue entry.
///
/// Names that are not exact catalogue names are kept as strings and resolved
/// case-insensitively by [`FrequencySpec::resolve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrequencySpec {
    /// Raw frequency in Hz.
    Hz(f64),
    /// Catalogue entry.
    Solfeggio(SolfeggioFrequency),
    /// Catalogue name pending lookup.
    Named(String),
}

impl FrequencySpec {
    /// Resolves to a frequency in Hz.
    ///
    /// Raw values are returned as-is; range checks belong to the generator.
    pub fn resolve(&self) -> Result<f64, SpecError> {
        match self {
            FrequencySpec::Hz(hz) => Ok(*hz),
            FrequencySpec::Solfeggio(f) => Ok(f.hz()),
            FrequencySpec::Named(name) => SolfeggioFrequency::from_name(name).map(|f| f.hz()),
        }
    }
}

impl From<f64> for FrequencySpec {
    fn from(hz: f64) -> Self {
        FrequencySpec::Hz(hz)
    }
}

impl From<SolfeggioFrequency> for FrequencySpec {
    fn from(f: SolfeggioFrequency) -> Self {
        FrequencySpec::Solfeggio(f)
    }
}

impl From<&str> for FrequencySpec {
    fn from(name: &str) -> Self {
        FrequencySpec::Named(name.to_string())
    }
}

/// A beat frequency given in Hz or by brainwave band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BeatSpec {
    /// Beat frequency in Hz.
    Hz(f64),
    /// Nominal beat of a brainwave band.
    Band(BrainwaveBand),
}

impl BeatSpec {
    /// Returns the beat frequency in Hz.
    pub fn hz(&self) -> f64 {
        match self {
            BeatSpec::Hz(hz) => *hz,
            BeatSpec::Band(band) => band.nominal_beat_hz(),
        }
    }
}

impl From<f64> for BeatSpec {
    fn from(hz: f64) -> Self {
        BeatSpec::Hz(hz)
    }
}

impl From<BrainwaveBand> for BeatSpec {
    fn from(band: BrainwaveBand) -> Self {
        BeatSpec::Band(band)
    }
}

/// Global fade-in/fade-out applied as the last synthesis step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FadeSpec {
    /// Fade-in time in seconds.
    pub attack: f64,
    /// Fade-out time in seconds.
    pub decay: f64,
}

impl Default for FadeSpec {
    fn default() -> Self {
        Self {
            attack: 0.1,
            decay: 0.1,
        }
    }
}

/// The tone to synthesize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ToneRecipe {
    /// A single sine tone (raw Hz or Solfeggio).
    PureTone {
        /// Tone frequency.
        frequency: FrequencySpec,
        /// Peak amplitude (0.0 to 1.0).
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Two tones summed in one channel.
    MonauralBeat {
        /// First tone in Hz.
        frequency1: f64,
        /// Second tone in Hz.
        frequency2: f64,
        /// Peak amplitude of the sum (0.0 to 1.0).
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// A carrier gated on and off at the pulse rate.
    IsochronicTone {
        /// Carrier frequency.
        frequency: FrequencySpec,
        /// Pulses per second.
        pulse_rate: f64,
        /// Fraction of each pulse period that is audible.
        #[serde(default = "default_duty_cycle")]
        duty_cycle: f64,
        /// Peak amplitude (0.0 to 1.0).
        #[serde(default = "default_amplitude")]
        amplitude: f64,
        /// Per-edge fade in seconds (engine default when omitted).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        edge_fade: Option<f64>,
    },
    /// Base tone on the left, base + beat on the right.
    BinauralBeat {
        /// Left channel frequency in Hz.
        base_frequency: f64,
        /// Right channel offset in Hz, or a band name.
        beat_frequency: BeatSpec,
        /// Peak amplitude per channel (0.0 to 1.0).
        #[serde(default = "default_amplitude")]
        amplitude: f64,
        /// Optional ring-modulating carrier in Hz.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        carrier_frequency: Option<f64>,
    },
    /// Binaural beat whose base is a Solfeggio frequency.
    SolfeggioBinaural {
        /// Base frequency (catalogue entry or name).
        solfeggio: FrequencySpec,
        /// Right channel offset in Hz, or a band name.
        beat_frequency: BeatSpec,
        /// Peak amplitude per channel (0.0 to 1.0).
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Several unit tones mixed with per-tone weights.
    Mix {
        /// Tones to mix.
        frequencies: Vec<FrequencySpec>,
        /// Mixing weights; an equal split when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weights: Option<Vec<f64>>,
    },
}

impl ToneRecipe {
    /// Returns the recipe's `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ToneRecipe::PureTone { .. } => "pure_tone",
            ToneRecipe::MonauralBeat { .. } => "monaural_beat",
            ToneRecipe::IsochronicTone { .. } => "isochronic_tone",
            ToneRecipe::BinauralBeat { .. } => "binaural_beat",
            ToneRecipe::SolfeggioBinaural { .. } => "solfeggio_binaural",
            ToneRecipe::Mix { .. } => "mix",
        }
    }

    /// Returns true if the recipe renders two independent channels.
    pub fn is_stereo(&self) -> bool {
        matches!(
            self,
            ToneRecipe::BinauralBeat { .. } | ToneRecipe::SolfeggioBinaural { .. }
        )
    }
}

/// A complete render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderParams {
    /// Output duration in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Global fade.
    #[serde(default)]
    pub fade: FadeSpec,
    /// Tone recipe.
    pub recipe: ToneRecipe,
}

impl RenderParams {
    /// Creates render params with the default sample rate and fade.
    pub fn new(duration_seconds: f64, recipe: ToneRecipe) -> Self {
        Self {
            duration_seconds,
            sample_rate: DEFAULT_SAMPLE_RATE,
            fade: FadeSpec::default(),
            recipe,
        }
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the global fade.
    pub fn with_fade(mut self, attack: f64, decay: f64) -> Self {
        self.fade = FadeSpec { attack, decay };
        self
    }

    /// Parses render params from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

fn default_duty_cycle() -> f64 {
    DEFAULT_DUTY_CYCLE
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}
