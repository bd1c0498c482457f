//! Error types for the audio backend.

use brainwave_spec::{BackendError, SpecError};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during tone synthesis.
///
/// Every variant is a usage error detected at call entry; nothing here is
/// transient.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A parameter is out of range or not finite.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Two buffers that must line up have different lengths.
    #[error("length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// Mixer signal and weight counts differ (or are zero).
    #[error("arity mismatch: {signals} signals but {weights} weights")]
    ArityMismatch {
        /// Number of signals.
        signals: usize,
        /// Number of weights.
        weights: usize,
    },

    /// A Solfeggio frequency name did not resolve.
    #[error("unknown Solfeggio frequency name: '{name}'")]
    UnknownFrequencyName {
        /// The unresolved name.
        name: String,
    },

    /// A recipe document could not be parsed.
    #[error("invalid recipe: {message}")]
    InvalidRecipe {
        /// Error message.
        message: String,
    },
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a length mismatch error.
    pub fn length_mismatch(expected: usize, found: usize) -> Self {
        Self::LengthMismatch { expected, found }
    }
}

impl From<SpecError> for AudioError {
    fn from(err: SpecError) -> Self {
        match err {
            SpecError::UnknownFrequencyName { name } => AudioError::UnknownFrequencyName { name },
            SpecError::Json(e) => AudioError::InvalidRecipe {
                message: e.to_string(),
            },
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParameter { .. } => "AUDIO_001",
            AudioError::LengthMismatch { .. } => "AUDIO_002",
            AudioError::ArityMismatch { .. } => "AUDIO_003",
            AudioError::UnknownFrequencyName { .. } => "AUDIO_004",
            AudioError::InvalidRecipe { .. } => "AUDIO_005",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

/// Checks that a frequency is finite and strictly positive.
pub(crate) fn check_frequency(name: &str, hz: f64) -> AudioResult<()> {
    if !hz.is_finite() || hz <= 0.0 {
        return Err(AudioError::invalid_param(
            name,
            format!("must be a positive finite frequency, got {hz}"),
        ));
    }
    Ok(())
}

/// Checks that an amplitude lies in [0, 1].
pub(crate) fn check_amplitude(name: &str, amplitude: f64) -> AudioResult<()> {
    if !(0.0..=1.0).contains(&amplitude) {
        return Err(AudioError::invalid_param(
            name,
            format!("must be between 0 and 1, got {amplitude}"),
        ));
    }
    Ok(())
}
