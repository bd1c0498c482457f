//! Tests for mixing tones from the Solfeggio catalogue.

use super::*;
use brainwave_spec::{FrequencySpec, SolfeggioFrequency};

use crate::error::AudioError;
use crate::signal::RenderSettings;
use crate::tones::generate_pure_tone;

#[test]
fn test_mix_matches_weighted_tones() {
    let settings = RenderSettings::new(0.1).with_sample_rate(8000).without_fade();
    let weights = [0.33, 0.33, 0.34];
    let mixed = mix_solfeggio_frequencies(
        [SolfeggioFrequency::Ut, SolfeggioFrequency::Sol, SolfeggioFrequency::La],
        Some(&weights),
        &settings,
    )
    .unwrap();

    let tones: Vec<_> = [174.0, 432.0, 528.0]
        .iter()
        .map(|&f| generate_pure_tone(f, 1.0, &settings).unwrap())
        .collect();
    let expected = mix(&tones, &weights).unwrap();

    assert_eq!(mixed.len(), 800);
    for (a, b) in mixed.iter().zip(&expected) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_default_weights_split_equally() {
    let settings = RenderSettings::new(0.05).with_sample_rate(8000).without_fade();
    let equal = mix_solfeggio_frequencies([174.0_f64, 528.0], None, &settings).unwrap();
    let explicit = mix_solfeggio_frequencies([174.0_f64, 528.0], Some(&[0.5, 0.5]), &settings).unwrap();
    assert_eq!(equal, explicit);
}

#[test]
fn test_named_frequencies_resolve() {
    let settings = RenderSettings::new(0.05).with_sample_rate(8000);
    let by_name = mix_solfeggio_frequencies(["mi", "fa"], None, &settings).unwrap();
    let by_hz = mix_solfeggio_frequencies([396.0_f64, 417.0], None, &settings).unwrap();
    assert_eq!(by_name, by_hz);

    let err = mix_solfeggio_frequencies(
        [FrequencySpec::Named("XYZ".to_string())],
        None,
        &settings,
    )
    .unwrap_err();
    assert!(matches!(err, AudioError::UnknownFrequencyName { ref name } if name == "XYZ"));
}

#[test]
fn test_fade_applied_once_to_mix() {
    let settings = RenderSettings::new(0.5).with_sample_rate(8000);
    let mixed = mix_solfeggio_frequencies([SolfeggioFrequency::La], None, &settings).unwrap();
    assert_eq!(mixed[0], 0.0);
    assert_eq!(mixed[mixed.len() - 1], 0.0);
}

#[test]
fn test_amplitude_count_mismatch() {
    let settings = RenderSettings::new(0.05).with_sample_rate(8000);
    let err = mix_solfeggio_frequencies([174.0_f64, 528.0], Some(&[1.0]), &settings).unwrap_err();
    assert!(matches!(
        err,
        AudioError::ArityMismatch {
            signals: 2,
            weights: 1
        }
    ));
    let empty: [f64; 0] = [];
    assert!(mix_solfeggio_frequencies(empty, None, &settings).is_err());
}
