//! Key press → game mutation
//!
//! The controller keeps no state of its own: the input buffer lives in the
//! [`GameState`] it is handed, so the same `(state, key)` pair always gives
//! the same result.

use super::Key;
use crate::game::{GameState, RowResult, SubmitError};
use crate::wordlists::WordStore;
use log::{debug, trace};

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// The input buffer changed
    Edited,
    /// The typed word is not in the word list and was thrown away
    Discarded,
    /// A row was appended to the board
    Submitted(RowResult),
}

/// Translates keys into game mutations against one word list
#[derive(Debug, Clone, Copy)]
pub struct InputController<'a> {
    words: &'a WordStore,
}

impl<'a> InputController<'a> {
    #[must_use]
    pub const fn new(words: &'a WordStore) -> Self {
        Self { words }
    }

    /// Apply one key press to `game`
    ///
    /// Keys are ignored once the game is over, letters are ignored while the
    /// buffer is full and Submit is ignored until it is. A word missing from
    /// the word list clears the buffer without touching the board.
    ///
    /// # Errors
    ///
    /// Any submission error other than `NotAWord`; the buffer is left as it
    /// was.
    pub fn on_key(&self, game: &mut GameState, key: Key) -> Result<KeyOutcome, SubmitError> {
        trace!("Key {key} with input {:?}", game.input().as_str());

        if game.status().is_over() {
            return Ok(KeyOutcome::Ignored);
        }

        let outcome = match key {
            Key::Backspace => {
                if game.input_mut().pop().is_some() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Letter(c) => {
                if game.input_mut().push(c) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Submit if !game.input().is_full() => KeyOutcome::Ignored,
            Key::Submit => {
                let guess = game.input().clone();
                match game.submit_guess(guess.as_str(), self.words) {
                    Ok(result) => {
                        game.input_mut().clear();
                        KeyOutcome::Submitted(result)
                    }
                    Err(SubmitError::NotAWord(word)) => {
                        debug!("Discarding {word}");
                        game.input_mut().clear();
                        KeyOutcome::Discarded
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        Ok(outcome)
    }
}
