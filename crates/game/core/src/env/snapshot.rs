//! Owned oracle data and the adapters that serve it.
//!
//! Content loaders assemble an [`OracleSnapshot`]; the runtime keeps it for
//! the whole process and lends [`GameEnv`] views of it to the rules.

use std::collections::BTreeMap;

use super::{
    ConfigOracle, GameEnv, GearPool, ItemDefinition, ItemOracle, MapOracle, NpcOracle, StartingKit,
};
use crate::state::{EnemyTier, WorldGraph};

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete snapshot of all oracle data.
#[derive(Debug, Clone)]
pub struct OracleSnapshot {
    pub items: ItemsSnapshot,
    pub world: WorldGraph,
    pub npcs: NpcSnapshot,
    pub config: ConfigSnapshot,
}

impl OracleSnapshot {
    pub fn new(
        items: ItemsSnapshot,
        world: WorldGraph,
        npcs: NpcSnapshot,
        config: ConfigSnapshot,
    ) -> Self {
        Self {
            items,
            world,
            npcs,
            config,
        }
    }

    /// Borrow every oracle at once.
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::new(&self.items, &self.world, &self.npcs, &self.config)
    }
}

/// Item catalog keyed by exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemsSnapshot {
    definitions: BTreeMap<String, ItemDefinition>,
}

impl ItemsSnapshot {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|definition| (definition.name.clone(), definition))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemsSnapshot {
    fn definition(&self, name: &str) -> Option<&ItemDefinition> {
        self.definitions.get(name)
    }

    fn definitions(&self) -> Vec<&ItemDefinition> {
        self.definitions.values().collect()
    }
}

impl MapOracle for WorldGraph {
    fn blueprint(&self) -> &WorldGraph {
        self
    }
}

/// Gear pools for every enemy tier plus the shared loot table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcSnapshot {
    pub regular: GearPool,
    pub armored: GearPool,
    pub elite: GearPool,
    pub common_loot: Vec<String>,
}

impl NpcOracle for NpcSnapshot {
    fn gear_pool(&self, tier: EnemyTier) -> &GearPool {
        match tier {
            EnemyTier::Regular => &self.regular,
            EnemyTier::Armored => &self.armored,
            EnemyTier::Elite => &self.elite,
        }
    }

    fn common_loot(&self) -> &[String] {
        &self.common_loot
    }
}

/// Hideout economy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigSnapshot {
    pub starting_kit: StartingKit,
    pub trader_stock: Vec<String>,
}

impl ConfigOracle for ConfigSnapshot {
    fn starting_kit(&self) -> &StartingKit {
        &self.starting_kit
    }

    fn trader_stock(&self) -> &[String] {
        &self.trader_stock
    }
}
