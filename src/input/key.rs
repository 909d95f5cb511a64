//! Logical keys of the on-screen keyboard

use std::fmt;

/// Keyboard rows as printed on the device, top to bottom
///
/// `=` submits, `<` deletes, the blank cell does nothing.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "=ZXCVBNM <"];

pub const SUBMIT_SYMBOL: char = '=';
pub const BACKSPACE_SYMBOL: char = '<';

/// A key press after touch coordinates were resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Uppercase ASCII letter
    Letter(char),
    Submit,
    Backspace,
}

impl Key {
    /// Build a letter key, normalizing case
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }

    /// Resolve a keyboard symbol to its key
    ///
    /// # Examples
    /// ```
    /// use paper_wordle::input::Key;
    ///
    /// assert_eq!(Key::from_symbol('q'), Some(Key::Letter('Q')));
    /// assert_eq!(Key::from_symbol('='), Some(Key::Submit));
    /// assert_eq!(Key::from_symbol(' '), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            SUBMIT_SYMBOL => Some(Self::Submit),
            BACKSPACE_SYMBOL => Some(Self::Backspace),
            c => Self::letter(c),
        }
    }

    /// Symbol printed on the key
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Letter(c) => c,
            Self::Submit => SUBMIT_SYMBOL,
            Self::Backspace => BACKSPACE_SYMBOL,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
