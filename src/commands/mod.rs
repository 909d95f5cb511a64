//! Command implementations

pub mod show;
pub mod simple;

pub use show::{saved_board, show_saved};
pub use simple::{play_lines, run_simple};
