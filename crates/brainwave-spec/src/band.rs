//! Brainwave frequency bands used to pick beat rates.

use serde::{Deserialize, Serialize};

/// EEG frequency band targeted by an entrainment beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrainwaveBand {
    /// 0.5-4 Hz, deep sleep.
    Delta,
    /// 4-8 Hz, meditation.
    Theta,
    /// 8-13 Hz, relaxed wakefulness.
    Alpha,
    /// 13-30 Hz, focus.
    Beta,
    /// 30-100 Hz.
    Gamma,
}

impl BrainwaveBand {
    /// All bands, lowest first.
    pub const ALL: [BrainwaveBand; 5] = [
        BrainwaveBand::Delta,
        BrainwaveBand::Theta,
        BrainwaveBand::Alpha,
        BrainwaveBand::Beta,
        BrainwaveBand::Gamma,
    ];

    /// Returns the half-open `[low, high)` beat range in Hz.
    pub const fn range(self) -> (f64, f64) {
        match self {
            BrainwaveBand::Delta => (0.5, 4.0),
            BrainwaveBand::Theta => (4.0, 8.0),
            BrainwaveBand::Alpha => (8.0, 13.0),
            BrainwaveBand::Beta => (13.0, 30.0),
            BrainwaveBand::Gamma => (30.0, 100.0),
        }
    }

    /// Returns the beat frequency conventionally used for this band.
    pub const fn nominal_beat_hz(self) -> f64 {
        match self {
            BrainwaveBand::Delta => 2.0,
            BrainwaveBand::Theta => 6.0,
            BrainwaveBand::Alpha => 10.0,
            BrainwaveBand::Beta => 20.0,
            BrainwaveBand::Gamma => 40.0,
        }
    }

    /// Classifies a beat frequency, or `None` if it falls outside every band.
    pub fn classify(beat_hz: f64) -> Option<Self> {
        Self::ALL.iter().copied().find(|band| {
            let (low, high) = band.range();
            beat_hz >= low && beat_hz < high
        })
    }
}
