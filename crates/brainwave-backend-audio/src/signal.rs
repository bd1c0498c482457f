//! Signal value types and per-call render settings.

use brainwave_spec::RenderParams;

use crate::envelope::Fade;
use crate::error::{AudioError, AudioResult};
use crate::timebase::{self, DEFAULT_SAMPLE_RATE};

/// A mono signal: one sample per time step, nominally in [-1.0, 1.0].
pub type Signal = Vec<f64>;

/// Two sample-aligned channels of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoSignal {
    left: Signal,
    right: Signal,
}

impl StereoSignal {
    /// Pairs two channels, rejecting unequal lengths.
    pub fn new(left: Signal, right: Signal) -> AudioResult<Self> {
        if left.len() != right.len() {
            return Err(AudioError::length_mismatch(left.len(), right.len()));
        }
        Ok(Self { left, right })
    }

    /// Duplicates a mono signal into both channels.
    pub fn from_mono(mono: Signal) -> Self {
        Self {
            left: mono.clone(),
            right: mono,
        }
    }

    /// Left channel.
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// Right channel.
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// Splits into `(left, right)`.
    pub fn into_channels(self) -> (Signal, Signal) {
        (self.left, self.right)
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Returns true if both channels are identical.
    pub fn is_mono(&self) -> bool {
        self.left == self.right
    }

    /// Creates interleaved `L R L R ...` samples.
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.left.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }

    /// Downmixes by averaging channels.
    pub fn to_mono(&self) -> Signal {
        self.left
            .iter()
            .zip(self.right.iter())
            .map(|(l, r)| (l + r) * 0.5)
            .collect()
    }
}

/// Duration, sample rate, and global fade shared by one generator call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Global fade applied last.
    pub fade: Fade,
}

impl RenderSettings {
    /// Creates settings at the default sample rate with the default fade.
    pub fn new(duration_seconds: f64) -> Self {
        Self {
            duration_seconds,
            sample_rate: DEFAULT_SAMPLE_RATE,
            fade: Fade::default(),
        }
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the fade.
    pub fn with_fade(mut self, fade: Fade) -> Self {
        self.fade = fade;
        self
    }

    /// Disables the fade.
    pub fn without_fade(self) -> Self {
        self.with_fade(Fade::NONE)
    }

    /// Number of samples these settings produce.
    pub fn num_samples(&self) -> AudioResult<usize> {
        timebase::sample_count(self.duration_seconds, self.sample_rate)
    }

    /// Builds the shared time axis.
    pub fn time_axis(&self) -> AudioResult<Vec<f64>> {
        timebase::time_axis(self.duration_seconds, self.sample_rate)
    }
}

impl From<&RenderParams> for RenderSettings {
    fn from(params: &RenderParams) -> Self {
        Self {
            duration_seconds: params.duration_seconds,
            sample_rate: params.sample_rate,
            fade: params.fade.into(),
        }
    }
}
