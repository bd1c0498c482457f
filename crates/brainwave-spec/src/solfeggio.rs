//! The Solfeggio frequency catalogue.
//!
//! A closed, immutable mapping from the traditional syllable names to their
//! frequencies in Hz.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// A named Solfeggio frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SolfeggioFrequency {
    /// 174 Hz.
    Ut,
    /// 285 Hz.
    Re,
    /// 396 Hz.
    Mi,
    /// 417 Hz.
    Fa,
    /// 432 Hz.
    Sol,
    /// 528 Hz.
    La,
    /// 639 Hz.
    Si,
    /// 741 Hz.
    Ut2,
    /// 852 Hz.
    Re2,
}

impl SolfeggioFrequency {
    /// Every catalogue entry, in ascending frequency order.
    pub const ALL: [SolfeggioFrequency; 9] = [
        SolfeggioFrequency::Ut,
        SolfeggioFrequency::Re,
        SolfeggioFrequency::Mi,
        SolfeggioFrequency::Fa,
        SolfeggioFrequency::Sol,
        SolfeggioFrequency::La,
        SolfeggioFrequency::Si,
        SolfeggioFrequency::Ut2,
        SolfeggioFrequency::Re2,
    ];

    /// Returns the frequency in Hz.
    pub const fn hz(self) -> f64 {
        match self {
            SolfeggioFrequency::Ut => 174.0,
            SolfeggioFrequency::Re => 285.0,
            SolfeggioFrequency::Mi => 396.0,
            SolfeggioFrequency::Fa => 417.0,
            SolfeggioFrequency::Sol => 432.0,
            SolfeggioFrequency::La => 528.0,
            SolfeggioFrequency::Si => 639.0,
            SolfeggioFrequency::Ut2 => 741.0,
            SolfeggioFrequency::Re2 => 852.0,
        }
    }

    /// Returns the catalogue name (e.g. "LA").
    pub const fn name(self) -> &'static str {
        match self {
            SolfeggioFrequency::Ut => "UT",
            SolfeggioFrequency::Re => "RE",
            SolfeggioFrequency::Mi => "MI",
            SolfeggioFrequency::Fa => "FA",
            SolfeggioFrequency::Sol => "SOL",
            SolfeggioFrequency::La => "LA",
            SolfeggioFrequency::Si => "SI",
            SolfeggioFrequency::Ut2 => "UT2",
            SolfeggioFrequency::Re2 => "RE2",
        }
    }

    /// Looks up an entry by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, SpecError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SpecError::unknown_frequency(name))
    }
}

impl FromStr for SolfeggioFrequency {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for SolfeggioFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Hz)", self.name(), self.hz())
    }
}
