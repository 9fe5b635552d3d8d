//! Content factory for building oracles from data files.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::Context;
use game_core::{ConfigSnapshot, GameConfig, ItemsSnapshot, NpcSnapshot, OracleSnapshot, WorldGraph};

use crate::loaders::{
    ConfigLoader, EncounterLoader, ItemLoader, LoadResult, MapLoader, TradeLoader, read_file,
    validate_snapshot,
};

const ITEMS_FILE: &str = "items.ron";
const WORLD_FILE: &str = "world.ron";
const ENCOUNTERS_FILE: &str = "encounters.ron";
const TRADE_FILE: &str = "trade.ron";
const CONFIG_FILE: &str = "config.toml";

/// Copies of `data/` compiled into the binary.
mod embedded {
    pub const ITEMS: &str = include_str!("../../data/items.ron");
    pub const WORLD: &str = include_str!("../../data/world.ron");
    pub const ENCOUNTERS: &str = include_str!("../../data/encounters.ron");
    pub const TRADE: &str = include_str!("../../data/trade.ron");
    pub const CONFIG: &str = include_str!("../../data/config.toml");
}

/// Content factory that loads all game content.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── world.ron
/// ├── encounters.ron
/// └── trade.ron
/// ```
///
/// [`ContentFactory::embedded`] serves the same files from the copies built
/// into the crate.
#[derive(Debug, Clone)]
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory over the content compiled into the crate.
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    /// Returns the data directory path, or `None` for embedded content.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn read(&self, file: &str, embedded: &'static str) -> LoadResult<Cow<'static, str>> {
        match &self.data_dir {
            Some(dir) => read_file(&dir.join(file)).map(Cow::Owned),
            None => Ok(Cow::Borrowed(embedded)),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let content = self.read(CONFIG_FILE, embedded::CONFIG)?;
        ConfigLoader::parse(&content).context(CONFIG_FILE)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemsSnapshot> {
        let content = self.read(ITEMS_FILE, embedded::ITEMS)?;
        ItemLoader::parse(&content).context(ITEMS_FILE)
    }

    /// Load the map blueprint from `world.ron`, instantiating loot from `items`.
    pub fn load_world(&self, items: &ItemsSnapshot) -> LoadResult<WorldGraph> {
        let content = self.read(WORLD_FILE, embedded::WORLD)?;
        MapLoader::parse(&content, items).context(WORLD_FILE)
    }

    /// Load enemy gear pools from `encounters.ron`.
    pub fn load_npcs(&self) -> LoadResult<NpcSnapshot> {
        let content = self.read(ENCOUNTERS_FILE, embedded::ENCOUNTERS)?;
        EncounterLoader::parse(&content).context(ENCOUNTERS_FILE)
    }

    /// Load the starting kit and trader stock from `trade.ron`.
    pub fn load_trade(&self) -> LoadResult<ConfigSnapshot> {
        let content = self.read(TRADE_FILE, embedded::TRADE)?;
        TradeLoader::parse(&content).context(TRADE_FILE)
    }

    /// Load every oracle and check that the files agree with each other.
    pub fn load_snapshot(&self) -> LoadResult<OracleSnapshot> {
        let items = self.load_items()?;
        let world = self.load_world(&items)?;
        let snapshot = OracleSnapshot::new(items, world, self.load_npcs()?, self.load_trade()?);
        validate_snapshot(&snapshot)?;
        Ok(snapshot)
    }
}

impl Default for ContentFactory {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ConfigOracle, EnemyTier, ItemOracle, NpcOracle};

    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Some(Path::new("/tmp/data")));
        assert_eq!(ContentFactory::embedded().data_dir(), None);
    }

    #[test]
    fn embedded_content_is_consistent() {
        let snapshot = ContentFactory::embedded().load_snapshot().unwrap();

        assert_eq!(snapshot.world.len(), 49);
        let extractions: Vec<&str> = snapshot
            .world
            .iter()
            .filter(|location| location.extraction)
            .map(|location| location.name.as_str())
            .collect();
        assert_eq!(
            extractions,
            [
                "Crossroads Extract",
                "ZB-013 Bunker",
                "Rock Passage Extract",
                "Tunnel Extract"
            ]
        );
    }

    #[test]
    fn embedded_dead_end_entrances() {
        // No exit leads into these two; a raid can still start there.
        let snapshot = ContentFactory::embedded().load_snapshot().unwrap();
        let world = &snapshot.world;
        let entered: std::collections::BTreeSet<_> = world
            .iter()
            .flat_map(|location| location.exits.iter().map(|exit| exit.target))
            .collect();
        let unreachable: Vec<&str> = world
            .iter()
            .filter(|location| !entered.contains(&location.id))
            .map(|location| location.name.as_str())
            .collect();
        assert_eq!(unreachable, ["Dormitories - Boiler Room", "Woods - Sniper Rock"]);
    }

    #[test]
    fn embedded_starting_kit_matches_new_game() {
        let trade = ContentFactory::embedded().load_trade().unwrap();
        let kit = trade.starting_kit();
        assert_eq!(kit.roubles, 30_000);
        assert_eq!(kit.equipped, ["AKM", "Kirasa Armor", "Kolpak-1 Helmet"]);
        assert_eq!(
            kit.inventory,
            ["AI-2 Medkit", "AI-2 Medkit", "Bandage", "Esmarch Tourniquet", "Painkillers"]
        );
        assert!(!trade.trader_stock().is_empty());
    }

    #[test]
    fn embedded_tiers_have_names_and_weapons() {
        let factory = ContentFactory::embedded();
        let npcs = factory.load_npcs().unwrap();
        let items = factory.load_items().unwrap();
        for tier in [EnemyTier::Regular, EnemyTier::Armored, EnemyTier::Elite] {
            let pool = npcs.gear_pool(tier);
            assert!(!pool.names.is_empty(), "{tier} has no names");
            assert!(pool.weapons.iter().all(|name| items.definition(name).is_some()));
        }
    }

    #[test]
    fn embedded_config_uses_default_raid_length() {
        let config = ContentFactory::embedded().load_config().unwrap();
        assert_eq!(config.raid_actions, GameConfig::DEFAULT_RAID_ACTIONS);
    }

    #[test]
    fn directory_override_reads_files() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let from_disk = ContentFactory::new(&dir).load_snapshot().unwrap();
        let embedded = ContentFactory::embedded().load_snapshot().unwrap();
        assert_eq!(from_disk.world, embedded.world);
        assert_eq!(from_disk.items, embedded.items);
    }

    #[test]
    fn missing_directory_fails_with_path() {
        let err = ContentFactory::new("/nonexistent/textract").load_items().unwrap_err();
        assert!(err.to_string().contains("items.ron"));
    }
}
