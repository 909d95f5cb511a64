//! Core domain types for the word game
//!
//! Words, per-letter feedback and the keyboard aggregate. Everything here is
//! pure and allocation-free.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{CellFeedback, Feedback};
pub use keyboard::{KeyboardFeedback, LetterStatus};
pub use word::{WORD_LEN, Word, WordError};
