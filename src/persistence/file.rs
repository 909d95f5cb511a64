use super::{PersistenceError, PersistenceGateway, Snapshot};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Snapshot stored as a text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceGateway for FileStore {
    fn load(&mut self) -> Result<Option<Snapshot>, PersistenceError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No saved game at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = Snapshot::parse(&text)?;
        info!(
            "Restored game with {} guesses from {}",
            snapshot.rows.len(),
            self.path.display()
        );
        Ok(Some(snapshot))
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        fs::write(&self.path, snapshot.to_text())?;
        debug!(
            "Saved {} guesses to {}",
            snapshot.rows.len(),
            self.path.display()
        );
        Ok(())
    }
}
