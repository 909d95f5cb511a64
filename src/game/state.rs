//! The authoritative game model
//!
//! A [`GameState`] is created fresh from a word store, or restored by
//! replaying a persisted snapshot. After that it only changes through
//! [`GameState::submit_guess`] and [`GameState::reset_game`].

use super::board::{Board, MAX_ROWS, Row};
use super::error::{Result, SubmitError};
use crate::core::{KeyboardFeedback, Word, WordError};
use crate::input::InputBuffer;
use crate::persistence::Snapshot;
use crate::wordlists::WordStore;
use log::{debug, warn};

/// Completion status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Outcome of an appended guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowResult {
    pub row: Row,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    answer: Word,
    board: Board,
    keyboard: KeyboardFeedback,
    input: InputBuffer,
    status: GameStatus,
}

impl GameState {
    /// Empty board for `answer`
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            board: Board::new(),
            keyboard: KeyboardFeedback::new(),
            input: InputBuffer::new(),
            status: GameStatus::InProgress,
        }
    }


    /// Rebuild a game from its answer and the guesses submitted so far
    ///
    /// Guesses are trusted and not checked against any word list. Replay
    /// stops at the first row that is not a five-letter word, and at any row
    /// that would follow a finished game.
    ///
    /// # Examples
    /// ```
    /// use paper_wordle::core::Word;
    /// use paper_wordle::game::{GameState, GameStatus};
    ///
    /// let answer = Word::new("PAPER").unwrap();
    /// let game = GameState::load_from_snapshot(answer, &["CRANE", "ON SD", "PAPER"]);
    /// assert_eq!(game.board().len(), 1);
    /// assert_eq!(game.status(), GameStatus::InProgress);
    /// ```
    pub fn load_from_snapshot<S: AsRef<str>>(answer: Word, rows: &[S]) -> Self {
        let mut game = Self::new(answer);

        for (i, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let guess = match Word::new(line) {
                Ok(guess) => guess,
                Err(e) => {
                    warn!("Stopping replay at row {}: {line:?} ({e})", i + 1);
                    break;
                }
            };
            if let Err(e) = game.add_row(guess) {
                warn!("Stopping replay at row {}: {e}", i + 1);
                break;
            }
        }

        game
    }

    /// Rebuild a game from a persisted snapshot
    #[must_use]
    pub fn restore(snapshot: &Snapshot) -> Self {
        Self::load_from_snapshot(snapshot.answer, &snapshot.rows)
    }

    /// Capture the answer and submitted guesses for persistence
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            answer: self.answer,
            rows: self
                .board
                .iter()
                .map(|row| row.guess().as_str().to_string())
                .collect(),
        }
    }

    /// Submit a complete guess
    ///
    /// # Errors
    ///
    /// - `GameAlreadyOver` once the game is won or lost
    /// - `BoardFull` if six rows already exist
    /// - `InvalidLength` unless the guess has exactly five characters
    /// - `NotAWord` if the guess is not in `words`; the board is unchanged
    pub fn submit_guess(&mut self, guess: &str, words: &WordStore) -> Result<RowResult> {
        if self.status.is_over() {
            return Err(SubmitError::GameAlreadyOver);
        }
        if self.board.is_full() {
            return Err(SubmitError::BoardFull);
        }

        let word = match Word::new(guess) {
            Ok(word) => word,
            Err(WordError::InvalidLength(len)) => return Err(SubmitError::InvalidLength(len)),
            Err(WordError::InvalidCharacters) => {
                return Err(SubmitError::NotAWord(guess.to_uppercase()));
            }
        };
        if !words.contains(&word) {
            debug!("Rejected {word}: not in word list");
            return Err(SubmitError::NotAWord(word.to_string()));
        }

        self.add_row(word)
    }

    /// Evaluate, append, merge into the keyboard and update the status
    fn add_row(&mut self, guess: Word) -> Result<RowResult> {
        if self.status.is_over() {
            return Err(SubmitError::GameAlreadyOver);
        }

        let row = Row::evaluate(guess, &self.answer);
        self.board.push(row)?;
        self.keyboard.record_row(row.guess(), row.feedback());

        self.status = if row.is_winning() {
            GameStatus::Won
        } else if self.board.len() == MAX_ROWS {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        debug!(
            "Row {} {} -> {:?}",
            self.board.len(),
            row.feedback().to_emoji(),
            self.status
        );

        Ok(RowResult {
            row,
            status: self.status,
        })
    }

    /// Throw away the current game and start over with `new_answer`
    pub fn reset_game(&mut self, new_answer: Word) {
        self.answer = new_answer;
        self.board.clear();
        self.keyboard.clear();
        self.input.clear();
        self.status = GameStatus::InProgress;
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardFeedback {
        &self.keyboard
    }

    #[inline]
    #[must_use]
    pub const fn input(&self) -> &InputBuffer {
        &self.input
    }

    #[inline]
    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellFeedback::{Absent, Contained, Hit};
    use crate::core::LetterStatus;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> WordStore {
        WordStore::from_word_list(words_from_slice(&[
            "PAPER", "PAPEY", "REPAY", "CRANE", "SLATE", "WORDS", "MOIST", "BLUNT",
        ]))
    }

    fn paper() -> GameState {
        GameState::new(Word::new("PAPER").unwrap())
    }

    #[test]
    fn new_game_is_empty() {
        let game = paper();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().is_empty());
        assert!(game.input().is_empty());
        assert_eq!(game.answer().as_str(), "PAPER");
    }

    #[test]
    fn submit_papey() {
        let mut game = paper();
        let result = game.submit_guess("PAPEY", &words()).unwrap();
        assert_eq!(result.row.feedback().cells(), &[Hit, Hit, Hit, Hit, Absent]);
        assert_eq!(result.status, GameStatus::InProgress);
        assert_eq!(game.board().len(), 1);
    }

    #[test]
    fn submit_repay() {
        let mut game = paper();
        let result = game.submit_guess("repay", &words()).unwrap();
        assert_eq!(
            result.row.feedback().cells(),
            &[Contained, Contained, Hit, Contained, Absent]
        );
        assert_eq!(game.keyboard().status(b'R'), LetterStatus::Contained);
        assert_eq!(game.keyboard().status(b'P'), LetterStatus::Hit);
        assert_eq!(game.keyboard().status(b'Y'), LetterStatus::Absent);
    }

    #[test]
    fn winning_guess() {
        let mut game = paper();
        let result = game.submit_guess("paper", &words()).unwrap();
        assert!(result.row.is_winning());
        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(
            game.submit_guess("CRANE", &words()),
            Err(SubmitError::GameAlreadyOver)
        );
        assert_eq!(game.board().len(), 1);
    }

    #[test]
    fn six_misses_lose() {
        let words = words();
        let mut game = paper();
        for guess in ["CRANE", "SLATE", "WORDS", "MOIST", "BLUNT"] {
            let result = game.submit_guess(guess, &words).unwrap();
            assert_eq!(result.status, GameStatus::InProgress);
        }
        let result = game.submit_guess("PAPEY", &words).unwrap();
        assert_eq!(result.status, GameStatus::Lost);
        assert_eq!(game.board().len(), 6);
        assert_eq!(
            game.submit_guess("PAPER", &words),
            Err(SubmitError::GameAlreadyOver)
        );
    }

    #[test]
    fn win_on_last_row() {
        let words = words();
        let mut game = paper();
        for guess in ["CRANE", "SLATE", "WORDS", "MOIST", "BLUNT"] {
            game.submit_guess(guess, &words).unwrap();
        }
        assert_eq!(
            game.submit_guess("PAPER", &words).unwrap().status,
            GameStatus::Won
        );
    }

    #[test]
    fn rejects_bad_length_and_unknown_words() {
        let mut game = paper();
        let words = words();
        assert_eq!(
            game.submit_guess("PAPE", &words),
            Err(SubmitError::InvalidLength(4))
        );
        assert_eq!(
            game.submit_guess("PAPERS", &words),
            Err(SubmitError::InvalidLength(6))
        );
        assert_eq!(
            game.submit_guess("paped", &words),
            Err(SubmitError::NotAWord("PAPED".to_string()))
        );
        assert_eq!(
            game.submit_guess("ON SD", &words),
            Err(SubmitError::NotAWord("ON SD".to_string()))
        );
        assert!(game.board().is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn keyboard_never_downgrades() {
        let words = words();
        let mut game = paper();
        game.submit_guess("PAPEY", &words).unwrap();
        assert_eq!(game.keyboard().status(b'E'), LetterStatus::Hit);
        // E lands on position 4 in CRANE, which is Contained for PAPER
        game.submit_guess("CRANE", &words).unwrap();
        assert_eq!(game.keyboard().status(b'E'), LetterStatus::Hit);
        assert_eq!(game.keyboard().status(b'R'), LetterStatus::Contained);
    }

    #[test]
    fn reset_clears_everything() {
        let words = words();
        let mut game = paper();
        game.submit_guess("PAPER", &words).unwrap();
        game.input_mut().push('C');

        game.reset_game(Word::new("CRANE").unwrap());
        assert_eq!(game, GameState::new(Word::new("CRANE").unwrap()));
        assert!(game.submit_guess("SLATE", &words).is_ok());
    }

    #[test]
    fn snapshot_replays_without_word_list() {
        let answer = Word::new("PAPER").unwrap();
        let game = GameState::load_from_snapshot(answer, &["ZZZZZ", "QQQQQ"]);
        assert_eq!(game.board().len(), 2);
        assert_eq!(game.keyboard().status(b'Z'), LetterStatus::Absent);
    }

    #[test]
    fn snapshot_replay_restores_status() {
        let answer = Word::new("PAPER").unwrap();
        let won = GameState::load_from_snapshot(answer, &["CRANE", "PAPER"]);
        assert_eq!(won.status(), GameStatus::Won);

        let rows = ["CRANE", "SLATE", "WORDS", "MOIST", "BLUNT", "PAPEY"];
        let lost = GameState::load_from_snapshot(answer, &rows);
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn snapshot_replay_truncates() {
        let answer = Word::new("PAPER").unwrap();

        let game = GameState::load_from_snapshot(answer, &["CRANE", "SLAT", "WORDS"]);
        assert_eq!(game.board().len(), 1);

        // Rows after a win are dropped
        let game = GameState::load_from_snapshot(answer, &["PAPER", "CRANE"]);
        assert_eq!(game.board().len(), 1);

        // Never more than six rows
        let rows = ["CRANE"; 8];
        let game = GameState::load_from_snapshot(answer, &rows);
        assert_eq!(game.board().len(), 6);

        let empty: [&str; 0] = [];
        assert!(GameState::load_from_snapshot(answer, &empty).board().is_empty());
    }

    #[test]
    fn snapshot_round_trip() {
        let words = words();
        let mut game = paper();
        game.submit_guess("CRANE", &words).unwrap();
        game.submit_guess("repay", &words).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.answer.as_str(), "PAPER");
        assert_eq!(snapshot.rows, ["CRANE", "REPAY"]);

        let restored = GameState::restore(&snapshot);
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.keyboard(), game.keyboard());
        assert_eq!(restored.snapshot(), snapshot);
    }
}
