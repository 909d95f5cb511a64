//! Terminal simulator of the e-paper device

pub mod app;
pub mod rendering;

pub use app::{Action, TerminalRenderer, map_key, run_tui};
