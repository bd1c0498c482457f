//! Weighted mixing of mono tone signals.
//!
//! The mixer sums `weight * signal` per sample and nothing else: it never
//! renormalizes or clips. Keeping the result inside [-1, 1] is the caller's
//! job, using the explicit helpers in this module when needed.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_soft_clip;
#[cfg(test)]
mod tests_solfeggio;

// Re-export public API
pub use mixer::{mix, mix_solfeggio_frequencies, mix_with_fade, Mixer};
pub use processing::{
    exceeds_unit_range, hard_clip, normalize, peak, soft_clip, soft_clip_buffer,
};
