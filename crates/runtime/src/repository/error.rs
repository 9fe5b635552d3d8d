//! Error types raised by repository implementations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("profile repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// The save exists but cannot be read back as a profile.
    #[error("corrupted save {}: {reason}", path.display())]
    CorruptSave { path: PathBuf, reason: String },
}

impl RepositoryError {
    pub fn is_corrupt_save(&self) -> bool {
        matches!(self, Self::CorruptSave { .. })
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
