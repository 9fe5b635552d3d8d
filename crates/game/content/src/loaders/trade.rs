//! Hideout economy loader: starting kit and trader stock.

use std::path::Path;

use game_core::ConfigSnapshot;

use crate::loaders::{LoadResult, read_file};

pub struct TradeLoader;

impl TradeLoader {
    pub fn load(path: &Path) -> LoadResult<ConfigSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ConfigSnapshot> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse trade RON: {}", e))
    }
}
