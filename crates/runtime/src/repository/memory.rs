//! In-memory ProfileRepository, used by tests and ephemeral sessions.

use std::sync::RwLock;

use game_core::ProfileRecord;

use super::{ProfileRepository, RepositoryError, Result};

/// Keeps the profile in memory; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    record: RwLock<Option<ProfileRecord>>,
    saves: RwLock<usize>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ProfileRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
            saves: RwLock::new(0),
        }
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.read().map(|count| *count).unwrap_or_default()
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn load(&self) -> Result<Option<ProfileRecord>> {
        let record = self.record.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(record.clone())
    }

    fn save(&self, record: &ProfileRecord) -> Result<()> {
        let mut current = self.record.write().map_err(|_| RepositoryError::LockPoisoned)?;
        *current = Some(record.clone());
        let mut saves = self.saves.write().map_err(|_| RepositoryError::LockPoisoned)?;
        *saves += 1;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.record.read().map(|record| record.is_some()).unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut current = self.record.write().map_err(|_| RepositoryError::LockPoisoned)?;
        *current = None;
        Ok(())
    }
}
