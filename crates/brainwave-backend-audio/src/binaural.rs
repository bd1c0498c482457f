//! Binaural beat synthesis.
//!
//! The left ear hears `base`, the right ear hears `base + beat`. Both
//! channels are rendered from one time axis and shaped by one envelope so
//! their fades stay phase-synchronized.

use brainwave_spec::{BeatSpec, BrainwaveBand, FrequencySpec, SolfeggioFrequency};
use log::debug;

use crate::envelope::{apply_envelope, fade_envelope, Fade};
use crate::error::{check_amplitude, check_frequency, AudioResult};
use crate::oscillator::{sine_at, sine_wave};
use crate::signal::{RenderSettings, StereoSignal};

/// Binaural beat parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinauralBeat {
    /// Left channel frequency in Hz.
    pub base_frequency: f64,
    /// Right channel offset in Hz.
    pub beat_frequency: f64,
    /// Peak amplitude per channel (0.0 to 1.0).
    pub amplitude: f64,
    /// Optional unit sine both channels are multiplied by.
    pub carrier_frequency: Option<f64>,
}

impl BinauralBeat {
    /// Creates a binaural beat.
    pub fn new(base_frequency: f64, beat_frequency: f64, amplitude: f64) -> Self {
        Self {
            base_frequency,
            beat_frequency,
            amplitude,
            carrier_frequency: None,
        }
    }

    /// Creates a binaural beat at a band's nominal beat rate.
    pub fn for_band(base_frequency: f64, band: BrainwaveBand, amplitude: f64) -> Self {
        Self::new(base_frequency, band.nominal_beat_hz(), amplitude)
    }

    /// Creates a binaural beat on a Solfeggio base.
    pub fn solfeggio(base: SolfeggioFrequency, beat_frequency: f64, amplitude: f64) -> Self {
        Self::new(base.hz(), beat_frequency, amplitude)
    }

    /// Multiplies both channels by a carrier sine.
    pub fn with_carrier(mut self, carrier_frequency: f64) -> Self {
        self.carrier_frequency = Some(carrier_frequency);
        self
    }

    /// Left channel frequency.
    pub fn left_frequency(&self) -> f64 {
        self.base_frequency
    }

    /// Right channel frequency.
    pub fn right_frequency(&self) -> f64 {
        self.base_frequency + self.beat_frequency
    }

    /// The band the beat falls in, if any.
    pub fn band(&self) -> Option<BrainwaveBand> {
        BrainwaveBand::classify(self.beat_frequency)
    }

    fn validate(&self) -> AudioResult<()> {
        check_frequency("base_frequency", self.base_frequency)?;
        check_frequency("beat_frequency", self.beat_frequency)?;
        if let Some(carrier) = self.carrier_frequency {
            check_frequency("carrier_frequency", carrier)?;
        }
        check_amplitude("amplitude", self.amplitude)
    }

    /// Renders both channels and applies one shared fade.
    pub fn generate(&self, settings: &RenderSettings) -> AudioResult<StereoSignal> {
        self.validate()?;
        let times = settings.time_axis()?;

        let mut left = sine_wave(self.left_frequency(), self.amplitude, &times);
        let mut right = sine_wave(self.right_frequency(), self.amplitude, &times);

        if let Some(carrier) = self.carrier_frequency {
            for ((l, r), &t) in left.iter_mut().zip(right.iter_mut()).zip(&times) {
                let c = sine_at(carrier, t);
                *l *= c;
                *r *= c;
            }
        }

        if settings.fade != Fade::NONE {
            let envelope = fade_envelope(times.len(), settings.sample_rate, settings.fade)?;
            left = apply_envelope(&left, &envelope)?;
            right = apply_envelope(&right, &envelope)?;
        }

        StereoSignal::new(left, right)
    }
}

/// Generates a binaural beat.
///
/// # Example
/// ```
/// use brainwave_backend_audio::{generate_binaural_beat, RenderSettings};
///
/// let settings = RenderSettings::new(1.0);
/// let stereo = generate_binaural_beat(200.0, 10.0, 0.3, &settings).unwrap();
/// assert_eq!(stereo.left().len(), stereo.right().len());
/// ```
pub fn generate_binaural_beat(
    base_frequency: f64,
    beat_frequency: impl Into<BeatSpec>,
    amplitude: f64,
    settings: &RenderSettings,
) -> AudioResult<StereoSignal> {
    let beat = BinauralBeat::new(base_frequency, beat_frequency.into().hz(), amplitude);
    debug!(
        "binaural beat: L {} Hz / R {} Hz, amplitude {amplitude}, {} s at {} Hz",
        beat.left_frequency(),
        beat.right_frequency(),
        settings.duration_seconds,
        settings.sample_rate
    );
    beat.generate(settings)
}

/// Generates a binaural beat whose base is a Solfeggio frequency.
pub fn generate_solfeggio_binaural(
    solfeggio: impl Into<FrequencySpec>,
    beat_frequency: impl Into<BeatSpec>,
    amplitude: f64,
    settings: &RenderSettings,
) -> AudioResult<StereoSignal> {
    let base = solfeggio.into().resolve()?;
    generate_binaural_beat(base, beat_frequency, amplitude, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AudioError;

    fn peak(samples: &[f64]) -> f64 {
        samples.iter().fold(0.0_f64, |a, &b| a.max(b.abs()))
    }

    #[test]
    fn test_binaural_example() {
        let settings = RenderSettings::new(1.0).without_fade();
        let stereo = generate_binaural_beat(200.0, 10.0, 0.3, &settings).unwrap();

        assert_eq!(stereo.left().len(), 44100);
        assert_eq!(stereo.right().len(), 44100);
        assert!((peak(stereo.left()) - 0.3).abs() < 1e-3);
        assert!((peak(stereo.right()) - 0.3).abs() < 1e-3);

        let times = settings.time_axis().unwrap();
        assert_eq!(stereo.left(), sine_wave(200.0, 0.3, &times).as_slice());
        assert_eq!(stereo.right(), sine_wave(210.0, 0.3, &times).as_slice());
    }

    #[test]
    fn test_channels_share_envelope() {
        let settings = RenderSettings::new(0.5)
            .with_sample_rate(8000)
            .with_fade(Fade::new(0.1, 0.2));
        let stereo = generate_binaural_beat(100.0, 4.0, 1.0, &settings).unwrap();
        let raw = generate_binaural_beat(100.0, 4.0, 1.0, &settings.without_fade()).unwrap();
        let envelope = fade_envelope(4000, 8000, Fade::new(0.1, 0.2)).unwrap();

        assert_eq!(stereo.left(), apply_envelope(raw.left(), &envelope).unwrap().as_slice());
        assert_eq!(stereo.right(), apply_envelope(raw.right(), &envelope).unwrap().as_slice());
    }

    #[test]
    fn test_solfeggio_binaural_matches_raw_base() {
        let settings = RenderSettings::new(0.2).with_sample_rate(8000);
        let named = generate_solfeggio_binaural(SolfeggioFrequency::La, 7.83, 0.3, &settings).unwrap();
        let raw = generate_binaural_beat(528.0, 7.83, 0.3, &settings).unwrap();
        assert_eq!(named, raw);
    }

    #[test]
    fn test_band_beat() {
        let beat = BinauralBeat::for_band(150.0, BrainwaveBand::Theta, 0.3);
        assert_eq!(beat.right_frequency(), 156.0);
        assert_eq!(beat.band(), Some(BrainwaveBand::Theta));

        let settings = RenderSettings::new(0.1).with_sample_rate(8000);
        let a = generate_binaural_beat(150.0, BrainwaveBand::Theta, 0.3, &settings).unwrap();
        let b = beat.generate(&settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_carrier_modulates_both_channels() {
        let settings = RenderSettings::new(0.05).with_sample_rate(8000).without_fade();
        let plain = BinauralBeat::new(200.0, 10.0, 0.5).generate(&settings).unwrap();
        let carried = BinauralBeat::new(200.0, 10.0, 0.5)
            .with_carrier(50.0)
            .generate(&settings)
            .unwrap();
        let times = settings.time_axis().unwrap();

        for (i, &t) in times.iter().enumerate() {
            let c = sine_at(50.0, t);
            assert!((carried.left()[i] - plain.left()[i] * c).abs() < 1e-12);
            assert!((carried.right()[i] - plain.right()[i] * c).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rejects_bad_params() {
        let settings = RenderSettings::new(0.1);
        let err = generate_binaural_beat(0.0, 10.0, 0.3, &settings).unwrap_err();
        assert!(matches!(err, AudioError::InvalidParameter { ref name, .. } if name == "base_frequency"));
        assert!(generate_binaural_beat(200.0, 0.0, 0.3, &settings).is_err());
        assert!(generate_binaural_beat(200.0, f64::NAN, 0.3, &settings).is_err());
        assert!(generate_binaural_beat(200.0, 10.0, 1.3, &settings).is_err());
        assert!(BinauralBeat::new(200.0, 10.0, 0.3)
            .with_carrier(-1.0)
            .generate(&settings)
            .is_err());
    }

    #[test]
    fn test_unusual_beat_is_not_rejected() {
        let settings = RenderSettings::new(0.01);
        assert!(generate_binaural_beat(200.0, 250.0, 0.3, &settings).is_ok());
    }
}
