//! Touch keyboard input
//!
//! Raw touch coordinates are resolved to a [`Key`] by the device layer; this
//! module turns keys into changes of the game.

mod buffer;
mod controller;
mod key;

pub use buffer::InputBuffer;
pub use controller::{InputController, KeyOutcome};
pub use key::{BACKSPACE_SYMBOL, KEYBOARD_ROWS, Key, SUBMIT_SYMBOL};
