//! Five-letter word representation
//!
//! A Word stores exactly five uppercase ASCII letters. Every guess, answer and
//! word-list entry goes through [`Word::new`], so case normalization happens
//! in exactly one place.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A 5-letter word, normalized to uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Length is counted in characters, so a multi-byte letter yields
    /// `InvalidCharacters` rather than a misleading length.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use paper_wordle::core::Word;
    ///
    /// let word = Word::new("paper").unwrap();
    /// assert_eq!(word.as_str(), "PAPER");
    ///
    /// assert!(Word::new("papers").is_err());
    /// assert!(Word::new("on sd").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        let mut chars = [0u8; WORD_LEN];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = ch.to_ascii_uppercase() as u8;
        }

        Ok(Self { chars })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Construction admits ASCII letters only
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.as_str(), "CRANE");
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.as_str(), "CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("FILE "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("....."), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cränk"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("paper").unwrap();
        assert_eq!(word.char_at(0), b'P');
        assert_eq!(word.char_at(2), b'P');
        assert_eq!(word.char_at(4), b'R');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("paper").unwrap();
        assert!(word.has_letter(b'P'));
        assert!(word.has_letter(b'R'));
        assert!(!word.has_letter(b'Y'));
        // Letters are stored uppercase
        assert!(!word.has_letter(b'p'));
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "slate".parse().unwrap();
        assert_eq!(format!("{word}"), "SLATE");
    }
}
