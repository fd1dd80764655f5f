//! A simple character vocabulary backed by a fixed, ordered character set.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::TextEncoder;

/// Ordered, deduplicated character set with two-way lookup.
#[derive(Debug, Clone)]
pub struct CharVocab {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl CharVocab {
    /// Create a vocabulary from an explicit, ordered character list.
    /// Duplicates keep their first position.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut ordered = Vec::new();
        let mut char_to_index = HashMap::new();
        for ch in chars {
            if !char_to_index.contains_key(&ch) {
                char_to_index.insert(ch, ordered.len());
                ordered.push(ch);
            }
        }
        Self { chars: ordered, char_to_index }
    }

    /// Build the vocabulary from every distinct character of a sample text,
    /// in order of first appearance.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars())
    }

    /// Number of characters in the set.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Read-only view of the ordered character set.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl TextEncoder for CharVocab {
    fn index_of(&self, ch: char) -> Result<usize> {
        self.char_to_index
            .get(&ch)
            .copied()
            .ok_or(Error::UnknownChar(ch))
    }

    fn char_at(&self, index: usize) -> Result<char> {
        self.chars.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            char_set_size: self.chars.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let vocab = CharVocab::from_text("hello world");
        assert_eq!(vocab.size(), 8); // h e l o ' ' w r d
        for &ch in vocab.chars() {
            let idx = vocab.index_of(ch).unwrap();
            assert_eq!(vocab.char_at(idx).unwrap(), ch);
        }
    }

    #[test]
    fn test_unknown_char() {
        let vocab = CharVocab::from_text("abc");
        assert!(matches!(vocab.index_of('z'), Err(Error::UnknownChar('z'))));
    }

    #[test]
    fn test_index_out_of_range() {
        let vocab = CharVocab::from_text("abc");
        assert!(matches!(
            vocab.char_at(3),
            Err(Error::IndexOutOfRange { index: 3, char_set_size: 3 })
        ));
    }
}
