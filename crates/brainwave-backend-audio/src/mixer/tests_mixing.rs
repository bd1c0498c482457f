//! Tests for weighted mixing.

use super::*;
use crate::envelope::{fade_envelope, Fade};
use crate::error::AudioError;

fn ramp(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 / len as f64 - 0.5).collect()
}

#[test]
fn test_mix_single_signal_identity() {
    let s = ramp(64);
    let mixed = mix(&[s.clone()], &[1.0]).unwrap();
    assert_eq!(mixed, s);
}

#[test]
fn test_mix_equal_halves() {
    let s = ramp(64);
    let mixed = mix(&[s.clone(), s.clone()], &[0.5, 0.5]).unwrap();
    for (a, b) in mixed.iter().zip(&s) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_mix_weighted_sum() {
    let a = vec![1.0, 0.0, -1.0];
    let b = vec![0.5, 0.5, 0.5];
    let mixed = mix(&[a, b], &[0.2, 0.6]).unwrap();

    let expected = [0.2 + 0.3, 0.3, -0.2 + 0.3];
    for (got, want) in mixed.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn test_mix_does_not_renormalize() {
    let a = vec![0.9; 8];
    let mixed = mix(&[a.clone(), a], &[1.0, 1.0]).unwrap();
    assert!(mixed.iter().all(|&s| (s - 1.8).abs() < 1e-12));
    assert!(exceeds_unit_range(&mixed));
}

#[test]
fn test_mix_arity_mismatch() {
    let s = ramp(8);
    let err = mix(&[s.clone(), s], &[1.0]).unwrap_err();
    assert!(matches!(
        err,
        AudioError::ArityMismatch {
            signals: 2,
            weights: 1
        }
    ));
}

#[test]
fn test_mix_empty() {
    let err = mix(&[], &[]).unwrap_err();
    assert!(matches!(err, AudioError::ArityMismatch { .. }));
}

#[test]
fn test_mix_length_mismatch() {
    let err = mix(&[ramp(8), ramp(7)], &[0.5, 0.5]).unwrap_err();
    assert!(matches!(
        err,
        AudioError::LengthMismatch {
            expected: 8,
            found: 7
        }
    ));
}

#[test]
fn test_mix_rejects_non_finite_weight() {
    let err = mix(&[ramp(8)], &[f64::NAN]).unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameter { .. }));
}

#[test]
fn test_mixer_builder() {
    let a = vec![1.0; 4];
    let b = vec![-1.0; 4];
    let mut mixer = Mixer::new(4);
    mixer.add(&a, 0.75).unwrap();
    mixer.add(&b, 0.25).unwrap();

    assert_eq!(mixer.num_layers(), 2);
    assert_eq!(mixer.total_weight(), 1.0);
    assert_eq!(mixer.mix().unwrap(), vec![0.5; 4]);
}

#[test]
fn test_mixer_rejects_wrong_length_and_empty_mix() {
    let short = vec![0.0; 3];
    let mut mixer = Mixer::new(4);
    assert!(mixer.add(&short, 1.0).is_err());
    assert!(mixer.mix().is_err());
}

#[test]
fn test_mix_with_fade_applies_global_envelope() {
    let s = vec![1.0; 100];
    let fade = Fade::new(0.1, 0.1);
    let mixed = mix_with_fade(&[s.clone(), s], &[0.5, 0.5], fade, 100).unwrap();
    let envelope = fade_envelope(100, 100, fade).unwrap();

    for (got, want) in mixed.iter().zip(&envelope) {
        assert!((got - want).abs() < 1e-12);
    }
    assert_eq!(mixed[0], 0.0);
    assert_eq!(mixed[99], 0.0);
}
