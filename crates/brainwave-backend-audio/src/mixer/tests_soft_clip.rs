//! Tests for soft clipping.

use super::*;

#[test]
fn test_soft_clip_below_threshold() {
    assert_eq!(soft_clip(0.5, 0.8), 0.5);
    assert_eq!(soft_clip(-0.5, 0.8), -0.5);
    assert_eq!(soft_clip(0.8, 0.8), 0.8);
}

#[test]
fn test_soft_clip_above_threshold() {
    let clipped = soft_clip(1.5, 0.8);
    assert!(clipped > 0.8);
    assert!(clipped < 1.0);

    assert_eq!(soft_clip(-1.5, 0.8), -clipped);
}

#[test]
fn test_soft_clip_is_monotonic() {
    let mut previous = soft_clip(0.0, 0.7);
    for i in 1..100 {
        let current = soft_clip(i as f64 * 0.05, 0.7);
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_soft_clip_buffer() {
    let mut samples = vec![0.2, 1.2, -3.0, 0.9];
    soft_clip_buffer(&mut samples, 0.9);

    assert_eq!(samples[0], 0.2);
    assert_eq!(samples[3], 0.9);
    assert!(samples.iter().all(|s| s.abs() < 1.0));
}
