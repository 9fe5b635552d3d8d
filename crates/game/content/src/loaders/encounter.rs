//! Enemy gear pool loader.

use std::path::Path;

use game_core::NpcSnapshot;

use crate::loaders::{LoadResult, read_file};

/// Loader for per-tier gear pools and the shared loot table.
pub struct EncounterLoader;

impl EncounterLoader {
    pub fn load(path: &Path) -> LoadResult<NpcSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<NpcSnapshot> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse encounters RON: {}", e))
    }
}
