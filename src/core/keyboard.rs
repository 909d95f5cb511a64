//! Best-known status of every letter of the alphabet
//!
//! The on-screen keyboard marks each key with the strongest feedback its
//! letter has received in the current game.

use super::{CellFeedback, Feedback, Word};

/// Status of a single letter, ordered weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unknown,
    Absent,
    Contained,
    Hit,
}

impl From<CellFeedback> for LetterStatus {
    fn from(cell: CellFeedback) -> Self {
        match cell {
            CellFeedback::Hit => Self::Hit,
            CellFeedback::Contained => Self::Contained,
            CellFeedback::Absent => Self::Absent,
        }
    }
}

/// Letter → best status table for A-Z
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardFeedback([LetterStatus; 26]);

impl KeyboardFeedback {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of an ASCII letter (either case); non-letters are always `Unknown`
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        letter_index(letter).map_or(LetterStatus::Unknown, |i| self.0[i])
    }

    /// Raise the status of `letter` to `status` unless it already is stronger
    pub fn record(&mut self, letter: u8, status: LetterStatus) {
        if let Some(i) = letter_index(letter) {
            self.0[i] = self.0[i].max(status);
        }
    }

    /// Merge every cell of a submitted guess
    pub fn record_row(&mut self, guess: &Word, feedback: Feedback) {
        for (&letter, &cell) in guess.chars().iter().zip(feedback.cells()) {
            self.record(letter, cell.into());
        }
    }

    /// Forget everything
    pub fn clear(&mut self) {
        self.0 = [LetterStatus::Unknown; 26];
    }

    /// Iterate `(letter, status)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterStatus)> + '_ {
        (b'A'..=b'Z').zip(self.0.iter().copied())
    }
}

fn letter_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
}
