//! Repository contract for saving and loading the player profile.

use game_core::ProfileRecord;

use super::Result;

/// Storage for one player profile.
///
/// The session decides what to store (a gearless checkpoint at raid start, the
/// full profile after hideout changes and extraction); repositories only move
/// records in and out.
pub trait ProfileRepository: Send + Sync {
    /// Load the stored profile.
    ///
    /// Returns `Ok(None)` when nothing was saved yet and
    /// [`RepositoryError::CorruptSave`](super::RepositoryError::CorruptSave)
    /// when a save exists but cannot be parsed.
    fn load(&self) -> Result<Option<ProfileRecord>>;

    /// Replace the stored profile.
    fn save(&self, record: &ProfileRecord) -> Result<()>;

    /// Check if a profile exists
    fn exists(&self) -> bool;

    /// Delete the stored profile, if any.
    fn delete(&self) -> Result<()>;
}
