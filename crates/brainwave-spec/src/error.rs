//! Error types for recipe parsing and catalogue lookups.

use thiserror::Error;

/// Errors raised while handling recipes and catalogue entries.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A frequency name does not match any Solfeggio catalogue entry.
    #[error("unknown Solfeggio frequency name: '{name}'")]
    UnknownFrequencyName {
        /// The name that failed to resolve.
        name: String,
    },
}

impl SpecError {
    /// Creates an unknown frequency name error.
    pub fn unknown_frequency(name: impl Into<String>) -> Self {
        Self::UnknownFrequencyName { name: name.into() }
    }
}

/// Trait for backend-specific errors.
///
/// Backends implement this so callers can report failures uniformly,
/// regardless of which synthesis backend produced them.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001". These codes are stable and
    /// can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
