//! Library crate for acrostic-style text generation.
//!
//! Drives an externally trained next-character model: each word is seeded
//! with one initial letter, then extended one sampled character at a time
//! until the model produces a word boundary.

pub mod error;
pub mod generate;
pub mod model;
pub mod sampler;
pub mod vocab;

pub use error::{Error, Result};
pub use generate::{generate_text, CharSink, CharWindow};
pub use model::{LanguageModel, TextEncoder};
pub use sampler::sample;
pub use vocab::CharVocab;
