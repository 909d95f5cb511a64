//! Text markers standing in for the device's drawn shapes
//!
//! On the panel a hit is a filled circle, a contained letter a triangle and a
//! used-but-absent key is struck through. Terminals get the same shapes as
//! bracket pairs around the letter.

use crate::core::{CellFeedback, LetterStatus};

/// Board cell such as `(P)` for a hit or `/R\` for a contained letter
#[must_use]
pub fn cell_marker(letter: char, cell: CellFeedback) -> String {
    match cell {
        CellFeedback::Hit => format!("({letter})"),
        CellFeedback::Contained => format!("/{letter}\\"),
        CellFeedback::Absent => format!(" {letter} "),
    }
}

/// Keyboard key decorated with the best status of its letter
#[must_use]
pub fn key_marker(symbol: char, status: LetterStatus) -> String {
    match status {
        LetterStatus::Hit => format!("({symbol})"),
        LetterStatus::Contained => format!("/{symbol}\\"),
        LetterStatus::Absent => format!("-{symbol}-"),
        LetterStatus::Unknown => format!("[{symbol}]"),
    }
}

/// Empty or partially typed cell
#[must_use]
pub fn pending_marker(letter: Option<char>) -> String {
    format!("[{}]", letter.unwrap_or(' '))
}
