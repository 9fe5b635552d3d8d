//! Item catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use game_core::{ItemDefinition, ItemsSnapshot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemsSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog document.
    ///
    /// Names are the lookup key for every other content file, so duplicates
    /// are rejected instead of silently shadowing each other.
    pub fn parse(content: &str) -> LoadResult<ItemsSnapshot> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for definition in &catalog.items {
            if !seen.insert(definition.name.as_str()) {
                anyhow::bail!("Item '{}' is defined more than once", definition.name);
            }
        }

        Ok(ItemsSnapshot::new(catalog.items))
    }
}
