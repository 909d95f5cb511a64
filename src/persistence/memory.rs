use super::{PersistenceError, PersistenceGateway, Snapshot};

/// Snapshot kept in memory, counting saves
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out as if `snapshot` had been saved by an earlier run
    #[must_use]
    pub const fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    #[must_use]
    pub const fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Number of saves since creation
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl PersistenceGateway for MemoryStore {
    fn load(&mut self) -> Result<Option<Snapshot>, PersistenceError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}
