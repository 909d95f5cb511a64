//! Submitted rows and the fixed-capacity board holding them

use super::error::{Result, SubmitError};
use crate::core::{Feedback, Word};

/// Maximum number of guesses per game
pub const MAX_ROWS: usize = 6;

/// One submitted guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    guess: Word,
    feedback: Feedback,
}

impl Row {
    /// Evaluate `guess` against `answer`
    #[must_use]
    pub fn evaluate(guess: Word, answer: &Word) -> Self {
        Self {
            feedback: Feedback::calculate(&guess, answer),
            guess,
        }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[inline]
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.feedback.is_perfect()
    }
}

/// Append-only sequence of at most [`MAX_ROWS`] rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: heapless::Vec<Row, MAX_ROWS>,
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: heapless::Vec::new(),
        }
    }

    /// Append a row
    ///
    /// # Errors
    ///
    /// Returns `BoardFull` when [`MAX_ROWS`] rows are already present.
    pub fn push(&mut self, row: Row) -> Result<()> {
        self.rows.push(row).map_err(|_| SubmitError::BoardFull)
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.is_full()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}
