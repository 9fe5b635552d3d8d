//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and the loaders that turn its
//! RON/TOML files into oracle snapshots:
//! - Item catalog (`items.ron`)
//! - Raid map with ground loot and containers (`world.ron`)
//! - Enemy gear pools per tier (`encounters.ron`)
//! - Starting kit and trader stock (`trade.ron`)
//! - Game configuration (`config.toml`)
//!
//! The files are compiled into the crate and can be overridden from a
//! directory at runtime. Content is consumed by the runtime and never appears
//! in saved profiles except as item names.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EncounterLoader, ItemLoader, LoadResult, MapLoader, TradeLoader,
    validate_snapshot,
};
