//! File-based ProfileRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::ProfileRecord;

use super::{ProfileRepository, RepositoryError, Result};

/// Stores the profile as one pretty-printed JSON file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the save, so
/// a crash mid-write leaves the previous profile intact.
#[derive(Debug, Clone)]
pub struct FileProfileRepository {
    path: PathBuf,
}

impl FileProfileRepository {
    /// Create a repository for `file_name` inside `base_dir`, creating the
    /// directory if needed.
    pub fn new(base_dir: impl AsRef<Path>, file_name: &str) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(file_name),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl ProfileRepository for FileProfileRepository {
    fn load(&self) -> Result<Option<ProfileRecord>> {
        if !self.path.exists() {
            tracing::debug!("No profile at {}", self.path.display());
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let record: ProfileRecord =
            serde_json::from_slice(&bytes).map_err(|e| RepositoryError::CorruptSave {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!("Loaded profile from {}", self.path.display());

        Ok(Some(record))
    }

    fn save(&self, record: &ProfileRecord) -> Result<()> {
        let temp_path = self.temp_path();

        let bytes = serde_json::to_vec_pretty(record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved profile to {}", self.path.display());

        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted profile {}", self.path.display());
        }
        Ok(())
    }
}
