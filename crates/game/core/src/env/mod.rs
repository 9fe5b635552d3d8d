//! Traits describing read-only game data.
//!
//! Oracles expose the item catalog, the world blueprint, enemy gear pools and
//! the hideout economy. The [`GameEnv`] aggregate bundles them so the rules can
//! access everything they need without coupling to concrete loaders.
//! Randomness is stateful and therefore passed separately as a
//! [`RandomSource`].
mod config;
mod error;
mod items;
mod map;
mod npc;
mod rng;
mod snapshot;

pub use config::{ConfigOracle, StartingKit};
pub use error::OracleError;
pub use items::{
    ArmorData, ArmorSlot, ConsumableData, ConsumableEffect, ItemDefinition, ItemKind, ItemOracle,
    WeaponClass, WeaponData,
};
pub use map::MapOracle;
pub use npc::{GearPool, NpcOracle};
pub use rng::{Chance, PcgRng, RandomSource, ScriptedRng};
pub use snapshot::{ConfigSnapshot, ItemsSnapshot, NpcSnapshot, OracleSnapshot};

/// Aggregates read-only oracles required by the session and its handlers.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    items: &'a dyn ItemOracle,
    map: &'a dyn MapOracle,
    npcs: &'a dyn NpcOracle,
    config: &'a dyn ConfigOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        map: &'a dyn MapOracle,
        npcs: &'a dyn NpcOracle,
        config: &'a dyn ConfigOracle,
    ) -> Self {
        Self {
            items,
            map,
            npcs,
            config,
        }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.map
    }

    pub fn npcs(&self) -> &'a dyn NpcOracle {
        self.npcs
    }

    pub fn config(&self) -> &'a dyn ConfigOracle {
        self.config
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("items", &self.items.definitions().len())
            .field("locations", &self.map.blueprint().len())
            .finish_non_exhaustive()
    }
}
