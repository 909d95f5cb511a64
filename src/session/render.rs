//! Drawing seam between the game and a display
//!
//! A device redraws the whole e-paper panel after a row is submitted and
//! only the input line while the player types; [`Renderer`] mirrors those
//! two refreshes.

use crate::game::{GameState, GameStatus, MAX_ROWS};

/// Rows shown instead of a board when there is no word list to play with
pub const DEMO_BOARD: [&str; 4] = ["PLACE", "WORDS", "FILE ", "ON SD"];

/// Answer shown on the demo board
pub const PLACEHOLDER_ANSWER: &str = ".....";

/// What the display should show
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    Game(&'a GameState),
    /// No candidate answers were loaded
    MissingWordList,
}

pub trait Renderer {
    /// Redraw everything
    ///
    /// # Errors
    ///
    /// Display failures.
    fn redraw(&mut self, screen: Screen<'_>) -> anyhow::Result<()>;

    /// Redraw just the line being typed
    ///
    /// # Errors
    ///
    /// Display failures.
    fn refresh_input(&mut self, game: &GameState) -> anyhow::Result<()> {
        self.redraw(Screen::Game(game))
    }
}

/// Guess counter such as `2/6`
#[must_use]
pub fn progress_label(game: &GameState) -> String {
    format!("{}/{MAX_ROWS}", game.board().len())
}

/// Message under the keyboard once the game is over
#[must_use]
pub fn end_message(game: &GameState) -> Option<String> {
    match game.status() {
        GameStatus::InProgress => None,
        GameStatus::Won => Some("Correct!".to_string()),
        GameStatus::Lost => Some(format!("Failed! It was {}", game.answer())),
    }
}
