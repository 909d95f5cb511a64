//! Paper Wordle
//!
//! Game engine for a five-letter word-guessing game on an e-paper touchscreen
//! device: per-row feedback, keyboard colouring, a key-driven input line and
//! a plain-text saved game that survives power loss.
//!
//! # Quick Start
//!
//! ```rust
//! use paper_wordle::core::{CellFeedback, Word};
//! use paper_wordle::game::{GameState, GameStatus};
//! use paper_wordle::wordlists::{WordStore, loader::words_from_slice};
//!
//! let words = WordStore::from_word_list(words_from_slice(&["PAPER", "REPAY"]));
//! let mut game = GameState::new(Word::new("PAPER").unwrap());
//!
//! let result = game.submit_guess("repay", &words).unwrap();
//! assert_eq!(result.row.feedback().cells()[2], CellFeedback::Hit);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Board and game rules
pub mod game;

// Key handling
pub mod input;

// Word lists
pub mod wordlists;

// Saved game
pub mod persistence;

// Controlling loop
pub mod session;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
