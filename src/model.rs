//! Capability traits for the external model and character encoder.
//!
//! The trained model and the character-set mapping live outside this crate;
//! these traits are the seams the generation loop drives them through.

use ndarray::{Array2, Array3};

use crate::error::Result;

/// A trained next-character model.
///
/// `predict` maps a one-hot window of shape `[1, sample_len, char_set_size]`
/// to one unnormalized probability row of shape `[1, char_set_size]`. The
/// same instance must not be driven by two generations at once.
pub trait LanguageModel {
    /// Length of the input window the model expects.
    fn sample_len(&self) -> usize;

    /// Size of the character vocabulary.
    fn char_set_size(&self) -> usize;

    /// Run one forward pass over a one-hot encoded window.
    fn predict(&self, window: &Array3<f32>) -> Result<Array2<f32>>;
}

/// Two-way mapping between characters and vocabulary indices.
pub trait TextEncoder {
    /// Vocabulary index of a character.
    ///
    /// # Errors
    /// Returns [`Error::UnknownChar`](crate::Error::UnknownChar) for
    /// characters outside the vocabulary.
    fn index_of(&self, ch: char) -> Result<usize>;

    /// Character at a vocabulary index.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange)
    /// when the index is not in the character set.
    fn char_at(&self, index: usize) -> Result<char>;
}
