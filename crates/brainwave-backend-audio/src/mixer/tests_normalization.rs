//! Tests for peak measurement and normalization.

use super::*;

#[test]
fn test_peak() {
    assert_eq!(peak(&[]), 0.0);
    assert_eq!(peak(&[0.25, -0.75, 0.5]), 0.75);
}

#[test]
fn test_exceeds_unit_range() {
    assert!(!exceeds_unit_range(&[1.0, -1.0, 0.0]));
    assert!(exceeds_unit_range(&[0.5, -1.01]));
}

#[test]
fn test_normalize_to_headroom() {
    let mut samples = vec![0.5, -0.3, 0.8, -0.2];
    normalize(&mut samples, -3.0);

    let target = 10.0_f64.powf(-3.0 / 20.0);
    assert!((peak(&samples) - target).abs() < 1e-9);
}

#[test]
fn test_normalize_silence_stays_silent() {
    let mut samples = vec![0.0; 4];
    normalize(&mut samples, 0.0);
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_overloaded_mix() {
    let mut samples = vec![2.0, -1.5, 3.0, -2.5];
    normalize(&mut samples, 0.0);

    assert!((peak(&samples) - 1.0).abs() < 1e-12);
    // Relative levels survive
    assert!((samples[0] / samples[2] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_hard_clip_counts_clamped_samples() {
    let mut samples = vec![1.5, -0.5, -2.0, 1.0];
    let clipped = hard_clip(&mut samples);

    assert_eq!(clipped, 2);
    assert_eq!(samples, vec![1.0, -0.5, -1.0, 1.0]);
}
