//! Runtime configuration
//!
//! Everything a frontend needs to open a device: the storage root holding
//! the word list and the saved game, and an optional seed for reproducible
//! answer picks.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORDS_FILE: &str = "words.txt";
pub const DEFAULT_STATE_FILE: &str = "state.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: PathBuf,
    pub words_file: String,
    pub state_file: String,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: PathBuf::from("."),
            words_file: DEFAULT_WORDS_FILE.to_string(),
            state_file: DEFAULT_STATE_FILE.to_string(),
            seed: None,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new(storage: impl Into<PathBuf>) -> Self {
        Self {
            storage: storage.into(),
            ..Self::default()
        }
    }

    /// Word list location; relative names resolve against the storage root
    #[must_use]
    pub fn words_path(&self) -> PathBuf {
        self.resolve(&self.words_file)
    }

    /// Saved game location
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.resolve(&self.state_file)
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.storage.join(path)
        }
    }

    /// Answer picker, seeded when a seed was configured
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
