//! Saving and restoring the game across power cycles
//!
//! The game only talks to a [`PersistenceGateway`]; [`FileStore`] keeps the
//! snapshot in a text file on the storage card, [`MemoryStore`] keeps it in
//! memory.

mod file;
mod memory;
mod snapshot;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use snapshot::Snapshot;

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("State storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("State file is empty")]
    MissingAnswer,
    #[error("State file answer {0:?} is not a five-letter word")]
    InvalidAnswer(String),
}

/// Where game snapshots live
pub trait PersistenceGateway {
    /// Read the saved snapshot, `None` if nothing was saved yet
    ///
    /// # Errors
    ///
    /// Storage failures and unreadable answers.
    fn load(&mut self) -> Result<Option<Snapshot>, PersistenceError>;

    /// Replace the saved snapshot
    ///
    /// # Errors
    ///
    /// Storage failures.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError>;
}
