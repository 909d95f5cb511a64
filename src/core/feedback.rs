//! Per-letter feedback calculation and representation
//!
//! Each position of a guess is classified as:
//! - Hit: same letter at the same position of the answer
//! - Contained: the letter occurs somewhere in the answer, but not here
//! - Absent: the letter does not occur in the answer at all
//!
//! Contained is decided by plain presence, without counting duplicates: a
//! guess with two A's against an answer with a single A reports both A's as
//! Contained.

use super::Word;
use super::word::WORD_LEN;

/// Classification of one letter of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFeedback {
    Hit,
    Contained,
    Absent,
}

/// Feedback for a whole guess, one cell per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([CellFeedback; WORD_LEN]);

impl Feedback {
    /// All hits (the guess is the answer)
    pub const PERFECT: Self = Self([CellFeedback::Hit; WORD_LEN]);

    /// Calculate the feedback when `guess` is guessed and `answer` is the target
    ///
    /// # Examples
    /// ```
    /// use paper_wordle::core::{CellFeedback::*, Feedback, Word};
    ///
    /// let answer = Word::new("paper").unwrap();
    /// let guess = Word::new("repay").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.cells(), &[Contained, Contained, Hit, Contained, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut cells = [CellFeedback::Absent; WORD_LEN];

        for (i, cell) in cells.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *cell = if letter == answer.char_at(i) {
                CellFeedback::Hit
            } else if answer.has_letter(letter) {
                CellFeedback::Contained
            } else {
                CellFeedback::Absent
            };
        }

        Self(cells)
    }

    /// Get the per-position cells
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[CellFeedback; WORD_LEN] {
        &self.0
    }

    /// Check if every cell is a hit
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count the number of hit cells
    #[must_use]
    pub fn count_hits(self) -> usize {
        self.0.iter().filter(|&&c| c == CellFeedback::Hit).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use paper_wordle::core::{Feedback, Word};
    ///
    /// let answer = Word::new("paper").unwrap();
    /// let f = Feedback::calculate(&Word::new("papey").unwrap(), &answer);
    /// assert_eq!(f.to_emoji(), "🟩🟩🟩🟩⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        let mut result = String::with_capacity(20);
        for cell in self.0 {
            result.push(match cell {
                CellFeedback::Hit => '🟩',
                CellFeedback::Contained => '🟨',
                CellFeedback::Absent => '⬜',
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::CellFeedback::{Absent, Contained, Hit};
    use super::*;

    fn feedback(guess: &str, answer: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_hits(), 5);
    }

    #[test]
    fn feedback_all_absent() {
        let f = feedback("abcde", "fghij");
        assert_eq!(f.cells(), &[Absent; 5]);
        assert_eq!(f.count_hits(), 0);
    }

    #[test]
    fn feedback_word_against_itself() {
        for word in ["crane", "paper", "zzzzz", "aaaaa"] {
            assert!(feedback(word, word).is_perfect());
        }
    }

    #[test]
    fn feedback_one_letter_off() {
        let f = feedback("papey", "paper");
        assert_eq!(f.cells(), &[Hit, Hit, Hit, Hit, Absent]);
        assert!(!f.is_perfect());
    }

    #[test]
    fn feedback_repay_against_paper() {
        let f = feedback("repay", "paper");
        assert_eq!(f.cells(), &[Contained, Contained, Hit, Contained, Absent]);
    }

    #[test]
    fn feedback_duplicates_are_not_counted() {
        // CRANE has a single A, both A's of BANAL still report Contained
        let f = feedback("banal", "crane");
        assert_eq!(f.cells(), &[Absent, Contained, Contained, Contained, Absent]);

        // A Hit does not consume the letter for other positions either
        let f = feedback("eerie", "crane");
        assert_eq!(f.cells(), &[Contained, Contained, Contained, Absent, Hit]);
    }

    #[test]
    fn feedback_is_case_insensitive_through_word() {
        assert_eq!(feedback("RePaY", "pApEr"), feedback("REPAY", "PAPER"));
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(feedback("repay", "paper").to_emoji(), "🟨🟨🟩🟨⬜");
    }
}
