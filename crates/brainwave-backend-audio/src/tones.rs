//! Mono tone generators: pure tones, monaural beats, and isochronic pulses.
//!
//! Each generator validates its parameters, renders the raw tone over the
//! shared time axis, and applies the global fade as the final step.

use brainwave_spec::{FrequencySpec, SolfeggioFrequency};
use log::debug;

use crate::envelope::apply_fade;
use crate::error::{check_amplitude, check_frequency, AudioError, AudioResult};
use crate::oscillator::{sine_at, sine_wave};
use crate::signal::{RenderSettings, Signal};

/// Default length of each isochronic on/off edge ramp, in seconds.
pub const DEFAULT_EDGE_FADE_SECONDS: f64 = 0.005;

/// Common trait for mono tone generators.
pub trait Synthesizer {
    /// Checks parameters before any samples are produced.
    fn validate(&self) -> AudioResult<()>;

    /// Renders the raw (un-faded) tone over a time axis.
    fn synthesize(&self, times: &[f64]) -> Signal;

    /// Validates, renders over the settings' time axis, and applies the fade.
    fn generate(&self, settings: &RenderSettings) -> AudioResult<Signal> {
        self.validate()?;
        let times = settings.time_axis()?;
        let raw = self.synthesize(&times);
        apply_fade(raw, settings.sample_rate, settings.fade)
    }
}

/// A single sine tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PureTone {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude (0.0 to 1.0).
    pub amplitude: f64,
}

impl PureTone {
    /// Creates a pure tone.
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    /// Creates a tone at a Solfeggio frequency.
    pub fn solfeggio(frequency: SolfeggioFrequency, amplitude: f64) -> Self {
        Self::new(frequency.hz(), amplitude)
    }
}

impl Synthesizer for PureTone {
    fn validate(&self) -> AudioResult<()> {
        check_frequency("frequency", self.frequency)?;
        check_amplitude("amplitude", self.amplitude)
    }

    fn synthesize(&self, times: &[f64]) -> Signal {
        sine_wave(self.frequency, self.amplitude, times)
    }
}

/// Two tones summed in one channel.
///
/// The audible beat at `|f1 - f2|` Hz is the physical interference of the
/// two tones, so it is derived rather than configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonauralBeat {
    /// First tone in Hz.
    pub frequency1: f64,
    /// Second tone in Hz.
    pub frequency2: f64,
    /// Peak amplitude of the sum (0.0 to 1.0).
    pub amplitude: f64,
}

impl MonauralBeat {
    /// Creates a monaural beat.
    pub fn new(frequency1: f64, frequency2: f64, amplitude: f64) -> Self {
        Self {
            frequency1,
            frequency2,
            amplitude,
        }
    }

    /// The beat rate heard in the sum.
    pub fn beat_frequency(&self) -> f64 {
        (self.frequency1 - self.frequency2).abs()
    }
}

impl Synthesizer for MonauralBeat {
    fn validate(&self) -> AudioResult<()> {
        check_frequency("frequency1", self.frequency1)?;
        check_frequency("frequency2", self.frequency2)?;
        check_amplitude("amplitude", self.amplitude)
    }

    fn synthesize(&self, times: &[f64]) -> Signal {
        let scale = self.amplitude * 0.5;
        times
            .iter()
            .map(|&t| scale * (sine_at(self.frequency1, t) + sine_at(self.frequency2, t)))
            .collect()
    }
}

/// A carrier tone gated on and off at a fixed pulse rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsochronicTone {
    /// Carrier frequency in Hz.
    pub frequency: f64,
    /// Pulses per second.
    pub pulse_rate: f64,
    /// Fraction of each pulse period that is audible, in (0, 1].
    pub duty_cycle: f64,
    /// Peak amplitude (0.0 to 1.0).
    pub amplitude: f64,
    /// Length of each on/off edge ramp in seconds.
    pub edge_fade: f64,
}

impl IsochronicTone {
    /// Creates an isochronic tone with the default edge fade.
    pub fn new(frequency: f64, pulse_rate: f64, duty_cycle: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            pulse_rate,
            duty_cycle,
            amplitude,
            edge_fade: DEFAULT_EDGE_FADE_SECONDS,
        }
    }

    /// Sets the edge ramp length.
    pub fn with_edge_fade(mut self, seconds: f64) -> Self {
        self.edge_fade = seconds;
        self
    }

    /// Pulse period in seconds.
    pub fn period(&self) -> f64 {
        1.0 / self.pulse_rate
    }

    /// Edge ramp length as a fraction of one pulse period.
    ///
    /// Both ramps sit inside the on-window, so each is at most half of it.
    pub fn ramp_cycles(&self) -> f64 {
        (self.edge_fade * self.pulse_rate).min(self.duty_cycle * 0.5)
    }

    /// Gate gain at time `t`.
    pub fn gate_at(&self, t: f64) -> f64 {
        let phase = (t * self.pulse_rate).fract();
        isochronic_gate(phase, self.duty_cycle, self.ramp_cycles())
    }
}

impl Synthesizer for IsochronicTone {
    fn validate(&self) -> AudioResult<()> {
        check_frequency("frequency", self.frequency)?;
        check_frequency("pulse_rate", self.pulse_rate)?;
        if !(self.duty_cycle > 0.0 && self.duty_cycle <= 1.0) {
            return Err(AudioError::invalid_param(
                "duty_cycle",
                format!("must be in (0, 1], got {}", self.duty_cycle),
            ));
        }
        if !self.edge_fade.is_finite() || self.edge_fade <= 0.0 {
            return Err(AudioError::invalid_param(
                "edge_fade",
                format!("must be a positive finite time, got {}", self.edge_fade),
            ));
        }
        check_amplitude("amplitude", self.amplitude)
    }

    fn synthesize(&self, times: &[f64]) -> Signal {
        times
            .iter()
            .map(|&t| self.amplitude * sine_at(self.frequency, t) * self.gate_at(t))
            .collect()
    }
}

/// Gate gain for one position within a pulse period.
///
/// # Arguments
/// * `phase` - Position in the period, in [0, 1)
/// * `duty_cycle` - Audible fraction of the period
/// * `ramp` - Edge ramp length as a fraction of the period
///
/// # Returns
/// 0.0 outside the on-window; inside it, a linear rise over `ramp`, a hold
/// at 1.0, and a linear fall over the last `ramp` before `duty_cycle`.
pub fn isochronic_gate(phase: f64, duty_cycle: f64, ramp: f64) -> f64 {
    if duty_cycle >= 1.0 {
        return 1.0;
    }
    if phase >= duty_cycle {
        return 0.0;
    }
    if ramp <= 0.0 {
        return 1.0;
    }
    if phase < ramp {
        phase / ramp
    } else if phase > duty_cycle - ramp {
        (duty_cycle - phase) / ramp
    } else {
        1.0
    }
}

/// Generates a pure sine tone at a raw frequency.
pub fn generate_pure_tone(
    frequency: f64,
    amplitude: f64,
    settings: &RenderSettings,
) -> AudioResult<Signal> {
    generate_solfeggio_tone(frequency, amplitude, settings)
}

/// Generates a pure sine tone from Hz or a Solfeggio catalogue entry.
///
/// # Example
/// ```
/// use brainwave_backend_audio::{generate_solfeggio_tone, RenderSettings};
/// use brainwave_spec::SolfeggioFrequency;
///
/// let settings = RenderSettings::new(1.0).without_fade();
/// let tone = generate_solfeggio_tone(SolfeggioFrequency::La, 0.3, &settings).unwrap();
/// assert_eq!(tone.len(), 44100);
/// assert_eq!(tone[0], 0.0);
/// ```
pub fn generate_solfeggio_tone(
    frequency: impl Into<FrequencySpec>,
    amplitude: f64,
    settings: &RenderSettings,
) -> AudioResult<Signal> {
    let frequency = frequency.into().resolve()?;
    debug!(
        "pure tone: {frequency} Hz, amplitude {amplitude}, {} s at {} Hz",
        settings.duration_seconds, settings.sample_rate
    );
    PureTone::new(frequency, amplitude).generate(settings)
}

/// Generates a monaural beat from two tone frequencies.
pub fn generate_monaural_beat(
    frequency1: f64,
    frequency2: f64,
    amplitude: f64,
    settings: &RenderSettings,
) -> AudioResult<Signal> {
    let beat = MonauralBeat::new(frequency1, frequency2, amplitude);
    debug!(
        "monaural beat: {frequency1} Hz + {frequency2} Hz (beat {} Hz), amplitude {amplitude}",
        beat.beat_frequency()
    );
    beat.generate(settings)
}

/// Generates an isochronic tone with the default edge fade.
pub fn generate_isochronic_tone(
    frequency: impl Into<FrequencySpec>,
    pulse_rate: f64,
    duty_cycle: f64,
    amplitude: f64,
    settings: &RenderSettings,
) -> AudioResult<Signal> {
    let frequency = frequency.into().resolve()?;
    debug!(
        "isochronic tone: {frequency} Hz pulsed at {pulse_rate} Hz, duty {duty_cycle}, amplitude {amplitude}"
    );
    IsochronicTone::new(frequency, pulse_rate, duty_cycle, amplitude).generate(settings)
}
