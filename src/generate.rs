//! The acrostic generation loop.
//!
//! Each initial letter seeds one word: the letter is pushed into a sliding
//! window of recent character indices, the model predicts a distribution
//! for the next character, one character is sampled and appended, and the
//! word ends when a whitespace character is produced.

use std::collections::VecDeque;

use ndarray::Array3;
use rand::Rng;

use crate::error::{Error, Result};
use crate::model::{LanguageModel, TextEncoder};
use crate::sampler;

/// Fixed-length window of recent character indices fed to the model.
///
/// Mutation is strictly "drop oldest, append newest"; the length never
/// changes after construction.
#[derive(Debug, Clone)]
pub struct CharWindow {
    indices: VecDeque<usize>,
}

impl CharWindow {
    /// Copy the seed indices into a fresh window. The caller's slice is
    /// left untouched.
    pub fn new(seed_indices: &[usize]) -> Self {
        Self {
            indices: seed_indices.iter().copied().collect(),
        }
    }

    /// Window length, constant for the lifetime of the window.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Drop the oldest index and append `index`. A zero-length window has
    /// nothing to drop and stays empty.
    pub fn push(&mut self, index: usize) {
        if self.indices.pop_front().is_some() {
            self.indices.push_back(index);
        }
    }

    /// One-hot encode the window as a `[1, len, char_set_size]` tensor.
    ///
    /// # Errors
    /// Fails with `IndexOutOfRange` if any window index does not fit the
    /// character set.
    pub fn one_hot(&self, char_set_size: usize) -> Result<Array3<f32>> {
        let mut encoded = Array3::<f32>::zeros((1, self.indices.len(), char_set_size));
        for (pos, &index) in self.indices.iter().enumerate() {
            if index >= char_set_size {
                return Err(Error::IndexOutOfRange { index, char_set_size });
            }
            encoded[[0, pos, index]] = 1.0;
        }
        Ok(encoded)
    }
}

/// Receiver for generated characters as they are produced.
///
/// The generation loop calls `on_char` once per sampled character, in
/// generation order, and does not continue until the call returns. An error
/// aborts generation and propagates to the caller.
pub trait CharSink {
    fn on_char(&mut self, ch: char) -> Result<()>;
}

impl<F> CharSink for F
where
    F: FnMut(char) -> Result<()>,
{
    fn on_char(&mut self, ch: char) -> Result<()> {
        self(ch)
    }
}

/// Generate one word per initial letter, separated by single spaces.
///
/// `seed_indices` provides the initial window contents and must have length
/// `model.sample_len()`; it is copied, never mutated. For each letter the
/// window is shifted with that letter's index, then characters are sampled
/// at `temperature` until the model produces whitespace. The terminating
/// whitespace of the final word, if any, is retained verbatim.
///
/// With no initial letters the model is never invoked and `""` is returned.
///
/// # Errors
/// Model, encoder, and sink failures propagate unchanged; there is no retry
/// or partial-result return.
pub fn generate_text<M, E, R>(
    model: &M,
    encoder: &E,
    seed_indices: &[usize],
    initial_letters: &[char],
    temperature: f32,
    rng: &mut R,
    mut sink: Option<&mut dyn CharSink>,
) -> Result<String>
where
    M: LanguageModel + ?Sized,
    E: TextEncoder + ?Sized,
    R: Rng + ?Sized,
{
    let sample_len = model.sample_len();
    if seed_indices.len() != sample_len {
        return Err(Error::ShapeMismatch {
            expected: vec![sample_len],
            got: vec![seed_indices.len()],
        });
    }
    let char_set_size = model.char_set_size();

    let mut window = CharWindow::new(seed_indices);
    let mut generated = String::new();

    for (i, &letter) in initial_letters.iter().enumerate() {
        // Single space between consecutive words, none before the first.
        if i > 0 {
            generated.push(' ');
        }
        generated.push(letter);
        window.push(encoder.index_of(letter)?);

        loop {
            let input = window.one_hot(char_set_size)?;
            let output = model.predict(&input)?;
            if output.shape() != [1, char_set_size] {
                return Err(Error::ShapeMismatch {
                    expected: vec![1, char_set_size],
                    got: output.shape().to_vec(),
                });
            }

            let winner_index = sampler::sample(output.row(0), temperature, rng);
            let winner_char = encoder.char_at(winner_index)?;

            generated.push(winner_char);
            if let Some(sink) = sink.as_deref_mut() {
                sink.on_char(winner_char)?;
            }
            window.push(winner_index);

            if winner_char.is_whitespace() {
                break;
            }
            // `input` and `output` drop here, so the transient buffers are
            // released every iteration.
        }
    }

    Ok(generated)
}
