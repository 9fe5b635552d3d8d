//! Runtime configuration structures and loaders.

use std::env;
use std::path::PathBuf;

/// Where the profile lives, how randomness is seeded and where content comes
/// from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub save_dir: PathBuf,
    pub profile_file: String,
    /// Fixed seed for reproducible raids; OS entropy when `None`.
    pub seed: Option<u64>,
    /// Directory overriding the embedded content files.
    pub content_dir: Option<PathBuf>,
}

impl RuntimeConfig {
    pub const DEFAULT_PROFILE_FILE: &'static str = "profile.json";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TEXTRACT_SAVE_DIR` - Directory holding the profile (default: platform data dir)
    /// - `TEXTRACT_PROFILE` - Profile file name (default: `profile.json`)
    /// - `TEXTRACT_SEED` - RNG seed (default: random)
    /// - `TEXTRACT_CONTENT_DIR` - Content directory override (default: embedded)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("TEXTRACT_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        if let Ok(name) = env::var("TEXTRACT_PROFILE")
            && !name.trim().is_empty()
        {
            config.profile_file = name;
        }
        config.seed = read_env::<u64>("TEXTRACT_SEED");
        config.content_dir = env::var_os("TEXTRACT_CONTENT_DIR").map(PathBuf::from);

        config
    }

    /// Platform data directory, e.g. `~/.local/share/textract` on Linux.
    pub fn default_save_dir() -> PathBuf {
        directories::ProjectDirs::from("", "", "textract")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./save_data"))
    }

    pub fn profile_path(&self) -> PathBuf {
        self.save_dir.join(&self.profile_file)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: Self::default_save_dir(),
            profile_file: Self::DEFAULT_PROFILE_FILE.to_owned(),
            seed: None,
            content_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_profile_json() {
        let config = RuntimeConfig::default();
        assert_eq!(config.profile_file, "profile.json");
        assert!(config.profile_path().ends_with("profile.json"));
        assert_eq!(config.seed, None);
        assert_eq!(config.content_dir, None);
    }
}
