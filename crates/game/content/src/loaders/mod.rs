//! Content loaders for reading game data from files.
//!
//! Each loader parses one RON/TOML document into the game-core types the
//! oracles serve. Loaders accept either a path or the document text, so the
//! same code reads the embedded copies and a directory override.

pub mod config;
pub mod encounter;
pub mod factory;
pub mod item;
pub mod map;
pub mod trade;
pub mod validate;

pub use config::ConfigLoader;
pub use encounter::EncounterLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use map::{ContainerSpec, LocationSpec, MapLoader, WorldSpec};
pub use trade::TradeLoader;
pub use validate::validate_snapshot;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
