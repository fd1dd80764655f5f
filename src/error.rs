//! Error types for generation.

use thiserror::Error;

/// Result type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced while driving the model. All of these propagate to the
/// caller unchanged; there is no retry or recovery at this layer.
#[derive(Error, Debug)]
pub enum Error {
    /// A tensor had the wrong shape, e.g. a seed window that does not match
    /// the model's expected length or a model output row of the wrong width.
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// The encoder has no vocabulary index for this character.
    #[error("character {0:?} is not in the character set")]
    UnknownChar(char),

    /// A character index fell outside the vocabulary.
    #[error("index {index} out of range for character set of size {char_set_size}")]
    IndexOutOfRange { index: usize, char_set_size: usize },

    /// A streaming sink reported a failure; generation stops.
    #[error("character sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}
