//! Brainwave Audio Backend
//!
//! This crate synthesizes brainwave-entrainment tones as float buffers:
//! - Pure and Solfeggio sine tones
//! - Monaural beats (two tones summed in one channel)
//! - Isochronic tones (a carrier gated at the pulse rate)
//! - Binaural beats (a different frequency in each ear)
//! - Weighted mixes of tones
//!
//! # Overview
//!
//! Every generator builds one shared time axis, computes the base waveform
//! directly from it, and applies the global fade envelope as the last step.
//! Channels that belong together are shaped by the same envelope instance, so
//! stereo output stays phase-aligned through the fades.
//!
//! Encoding (clamping, quantization, WAV) is left to the caller. The engine
//! never clips or renormalizes implicitly; see [`mixer::exceeds_unit_range`]
//! and [`mixer::hard_clip`].
//!
//! # Determinism
//!
//! All synthesis is deterministic. Given the same parameters, the output is
//! bit-identical across runs on the same platform, which
//! [`RenderResult::signal_hash`] makes easy to check.
//!
//! # Example
//!
//! ```
//! use brainwave_backend_audio::{generate_binaural_beat, RenderSettings};
//! use brainwave_spec::BrainwaveBand;
//!
//! let settings = RenderSettings::new(2.0).with_sample_rate(22050);
//! let stereo = generate_binaural_beat(200.0, BrainwaveBand::Alpha, 0.3, &settings).unwrap();
//!
//! assert_eq!(stereo.len(), 44100);
//! assert_eq!(stereo.left()[0], 0.0);
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] - Recipe entry point
//! - [`timebase`] - Sample counts and the shared time axis
//! - [`envelope`] - Linear fade envelopes
//! - [`tones`] - Pure, monaural and isochronic generators
//! - [`binaural`] - Stereo binaural beats
//! - [`mixer`] - Weighted mixing and opt-in level helpers
//! - [`analysis`] - Level and spectral probes

pub mod analysis;
pub mod binaural;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod mixer;
pub mod oscillator;
pub mod signal;
pub mod timebase;
pub mod tones;

// Re-export main types at crate root
pub use binaural::{generate_binaural_beat, generate_solfeggio_binaural, BinauralBeat};
pub use envelope::{apply_envelope, fade_envelope, Fade, FadeSamples};
pub use error::{AudioError, AudioResult};
pub use generate::{render, render_json, signal_hash, RenderOutput, RenderResult};
pub use mixer::{mix, mix_solfeggio_frequencies, mix_with_fade, Mixer};
pub use signal::{RenderSettings, Signal, StereoSignal};
pub use timebase::{
    sample_count, time_axis, DEFAULT_SAMPLE_RATE, MAX_DURATION_SECONDS, MAX_SAMPLES,
    MAX_SAMPLE_RATE,
};
pub use tones::{
    generate_isochronic_tone, generate_monaural_beat, generate_pure_tone,
    generate_solfeggio_tone, isochronic_gate, IsochronicTone, MonauralBeat, PureTone,
    Synthesizer, DEFAULT_EDGE_FADE_SECONDS,
};
