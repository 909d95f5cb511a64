//! Word lists for the game
//!
//! A [`WordStore`] answers two questions: is this a word the player may
//! guess, and which word should the next game be about.

pub mod loader;

use crate::core::Word;
use log::{debug, info, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordListError {
    #[error("No candidate answers loaded; put a words.txt on the storage card")]
    EmptyWordList,
}

/// Valid guesses plus the pool of candidate answers
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    valid: FxHashSet<Word>,
    candidates: Vec<Word>,
}

impl WordStore {
    /// Build a store with separate guess and answer lists
    ///
    /// Candidate answers are always accepted as guesses too.
    pub fn new(valid: impl IntoIterator<Item = Word>, candidates: Vec<Word>) -> Self {
        let mut valid: FxHashSet<Word> = valid.into_iter().collect();
        valid.extend(candidates.iter().copied());
        Self { valid, candidates }
    }

    /// Build a store where one list both validates guesses and seeds answers
    ///
    /// # Examples
    /// ```
    /// use paper_wordle::wordlists::{WordStore, loader::words_from_slice};
    ///
    /// let store = WordStore::from_word_list(words_from_slice(&["PAPER", "WORDS"]));
    /// assert!(store.is_valid_guess("paper"));
    /// assert!(!store.is_valid_guess("PAPED"));
    /// ```
    #[must_use]
    pub fn from_word_list(words: Vec<Word>) -> Self {
        Self::new(Vec::new(), words)
    }

    /// Load the store from a word-list file
    ///
    /// A missing file yields an empty store; the caller decides how to play
    /// without answers.
    ///
    /// # Errors
    ///
    /// Returns any I/O error other than the file not existing.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        match loader::load_from_file(path) {
            Ok(words) => {
                info!("Loaded {} words from {}", words.len(), path.display());
                Ok(Self::from_word_list(words))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Word list {} not found", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Check whether `word` (any case) may be submitted as a guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.contains(&w))
    }

    /// Check an already-normalized word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// Pick the answer for a new game, uniformly over the candidates
    ///
    /// # Errors
    ///
    /// Returns `EmptyWordList` if no candidates were loaded.
    pub fn pick_random_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, WordListError> {
        let answer = *self
            .candidates
            .choose(rng)
            .ok_or(WordListError::EmptyWordList)?;
        debug!("Picked a new answer from {} candidates", self.candidates.len());
        Ok(answer)
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
