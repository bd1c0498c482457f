//! Brainwave Render Recipe Library
//!
//! This crate provides the declarative types shared by Brainwave backends:
//! render recipes, the Solfeggio frequency catalogue, brainwave band presets,
//! and canonical recipe hashing.
//!
//! # Example
//!
//! ```
//! use brainwave_spec::{recipe_hash, RenderParams, SolfeggioFrequency, ToneRecipe};
//!
//! let params = RenderParams::new(
//!     15.0,
//!     ToneRecipe::PureTone {
//!         frequency: SolfeggioFrequency::La.into(),
//!         amplitude: 0.3,
//!     },
//! )
//! .with_fade(1.0, 1.0);
//!
//! let hash = recipe_hash(&params).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`band`]: Brainwave frequency bands
//! - [`error`]: Error types and the backend error trait
//! - [`hash`]: Canonical hashing
//! - [`recipe`]: Render params and tone recipes
//! - [`solfeggio`]: The Solfeggio frequency catalogue

pub mod band;
pub mod error;
pub mod hash;
pub mod recipe;
pub mod solfeggio;

pub use band::BrainwaveBand;
pub use error::{BackendError, SpecError};
pub use hash::{canonical_value_hash, recipe_hash};
pub use recipe::{
    BeatSpec, FadeSpec, FrequencySpec, RenderParams, ToneRecipe, DEFAULT_AMPLITUDE,
    DEFAULT_DUTY_CYCLE, DEFAULT_SAMPLE_RATE,
};
pub use solfeggio::SolfeggioFrequency;
