//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a config document. A raid always lasts at least one action.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(GameConfig::with_raid_actions(config.raid_actions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_raid_length() {
        let config = ConfigLoader::parse("raid_actions = 40\n").unwrap();
        assert_eq!(config.raid_actions, 40);
    }

    #[test]
    fn zero_length_raid_is_clamped() {
        let config = ConfigLoader::parse("raid_actions = 0\n").unwrap();
        assert_eq!(config.raid_actions, 1);
    }

    #[test]
    fn malformed_toml_fails() {
        assert!(ConfigLoader::parse("raid_actions = \"many\"").is_err());
    }
}
