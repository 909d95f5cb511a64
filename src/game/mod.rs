//! Game-state engine
//!
//! Board, status and the guess submission rules.

mod board;
mod error;
mod state;

pub use board::{Board, MAX_ROWS, Row};
pub use error::SubmitError;
pub use state::{GameState, GameStatus, RowResult};
