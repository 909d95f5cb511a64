//! Plain-text game snapshot
//!
//! ```text
//! PAPER      <- answer
//! CRANE      <- first guess
//! REPAY      <- second guess, and so on up to six
//! ```
//!
//! Parsing stops at the first guess line that is not five characters long,
//! so a partially written file still restores the rows before the damage.

use super::PersistenceError;
use crate::core::{WORD_LEN, Word};
use crate::game::MAX_ROWS;
use log::warn;
use std::fmt::Write as _;

/// Answer plus submitted guesses, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub answer: Word,
    pub rows: Vec<String>,
}

impl Snapshot {
    #[must_use]
    pub const fn new(answer: Word, rows: Vec<String>) -> Self {
        Self { answer, rows }
    }

    /// Parse snapshot text
    ///
    /// # Errors
    ///
    /// Returns `MissingAnswer` for empty text and `InvalidAnswer` when the
    /// first line is not a five-letter word. Damaged guess lines never fail
    /// the parse.
    ///
    /// # Examples
    /// ```
    /// use paper_wordle::persistence::Snapshot;
    ///
    /// let snapshot = Snapshot::parse("PAPER\nCRANE\nREP\nSLATE\n").unwrap();
    /// assert_eq!(snapshot.answer.as_str(), "PAPER");
    /// assert_eq!(snapshot.rows, ["CRANE"]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, PersistenceError> {
        let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

        let first = lines.next().ok_or(PersistenceError::MissingAnswer)?;
        let answer =
            Word::new(first).map_err(|_| PersistenceError::InvalidAnswer(first.to_string()))?;

        let mut rows = Vec::new();
        for line in lines {
            if line.chars().count() != WORD_LEN {
                warn!("Ignoring state from line {}: {line:?}", rows.len() + 2);
                break;
            }
            if rows.len() == MAX_ROWS {
                warn!("Ignoring state after {MAX_ROWS} guesses");
                break;
            }
            rows.push(line.to_string());
        }

        Ok(Self { answer, rows })
    }

    /// Render the snapshot as newline-terminated lines
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.rows.len() + 1) * (WORD_LEN + 1));
        let _ = writeln!(text, "{}", self.answer);
        for row in &self.rows {
            let _ = writeln!(text, "{row}");
        }
        text
    }
}
