use crate::core::WORD_LEN;

/// Letters typed for the guess that has not been submitted yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    letters: heapless::Vec<u8, WORD_LEN>,
}

impl InputBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: heapless::Vec::new(),
        }
    }

    /// Append an ASCII letter, uppercased
    ///
    /// Returns `false` and leaves the buffer alone when it is full or `letter`
    /// is not an ASCII letter.
    pub fn push(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(letter.to_ascii_uppercase() as u8).is_ok()
    }

    /// Remove the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop().map(char::from)
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.is_full()
    }
}
