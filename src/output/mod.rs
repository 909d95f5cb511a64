//! Terminal output formatting
//!
//! Text renditions of the board and keyboard for the line-mode frontends.

pub mod display;
pub mod formatters;

pub use display::{
    TextRenderer, format_board, format_game, format_keyboard, format_missing_word_list, print_game,
};
