//! Unified error types surfaced by the runtime API.

use thiserror::Error;

use game_core::OracleError;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("failed to load game content: {0:#}")]
    Content(anyhow::Error),

    /// The content's starting kit cannot build a new profile.
    #[error("failed to start a new game")]
    Session(#[from] OracleError),
}
