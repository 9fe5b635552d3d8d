//! World map loader.
//!
//! Map files name exits and loot by string. Building the [`WorldGraph`]
//! resolves exits to location ids and instantiates loot from the item
//! catalog, so a map that references anything unknown fails to load.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use game_core::{Container, Exit, Item, ItemOracle, Location, LocationId, LocationRange, WorldGraph};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map document for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSpec {
    pub locations: Vec<LocationSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSpec {
    pub name: String,
    pub description: String,
    pub range: LocationRange,
    #[serde(default)]
    pub high_traffic: bool,
    #[serde(default)]
    pub extraction: bool,
    /// `(direction, destination name)` pairs in display order.
    #[serde(default)]
    pub exits: Vec<(String, String)>,
    /// Item names lying on the ground at raid start.
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl WorldSpec {
    /// Builds the blueprint graph. Location ids follow file order.
    pub fn build(&self, items: &dyn ItemOracle) -> LoadResult<WorldGraph> {
        let mut ids = HashMap::with_capacity(self.locations.len());
        for (index, spec) in self.locations.iter().enumerate() {
            let id = u16::try_from(index)
                .map(LocationId)
                .map_err(|_| anyhow::anyhow!("Map has more than {} locations", u16::MAX))?;
            if ids.insert(spec.name.as_str(), id).is_some() {
                anyhow::bail!("Location '{}' is defined more than once", spec.name);
            }
        }

        let mut world = WorldGraph::new();
        for spec in &self.locations {
            let mut location = Location::new(
                LocationId(0),
                spec.name.as_str(),
                spec.description.as_str(),
                spec.range,
            );
            location.high_traffic = spec.high_traffic;
            location.extraction = spec.extraction;

            for (direction, destination) in &spec.exits {
                let target = ids.get(destination.as_str()).copied().ok_or_else(|| {
                    anyhow::anyhow!(
                        "Exit '{}' of '{}' leads to unknown location '{}'",
                        direction,
                        spec.name,
                        destination
                    )
                })?;
                location.exits.push(Exit {
                    direction: direction.clone(),
                    target,
                });
            }

            location.items = instantiate(items, &spec.items)
                .with_context(|| format!("Loot on the ground at '{}'", spec.name))?;
            for container in &spec.containers {
                let loot = instantiate(items, &container.items).with_context(|| {
                    format!("Container '{}' at '{}'", container.name, spec.name)
                })?;
                location.containers.push(Container::new(
                    container.name.as_str(),
                    container.description.as_str(),
                    loot,
                ));
            }

            world.add(location);
        }

        Ok(world)
    }
}

fn instantiate(items: &dyn ItemOracle, names: &[String]) -> LoadResult<Vec<Item>> {
    names
        .iter()
        .map(|name| items.instantiate(name).map_err(anyhow::Error::from))
        .collect()
}

/// Loader for world maps from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load and build a map from a RON file.
    pub fn load(path: &Path, items: &dyn ItemOracle) -> LoadResult<WorldGraph> {
        let content = read_file(path)?;
        Self::parse(&content, items)
    }

    pub fn parse(content: &str, items: &dyn ItemOracle) -> LoadResult<WorldGraph> {
        let spec: WorldSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;
        spec.build(items)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ItemDefinition, ItemKind, ItemsSnapshot, Weight};

    use super::*;

    fn catalog() -> ItemsSnapshot {
        ItemsSnapshot::new([
            ItemDefinition::new("Bolts", "Metal.", Weight::from_grams(100), 1500, ItemKind::Misc),
            ItemDefinition::new("Nuts", "Metal.", Weight::from_grams(100), 1200, ItemKind::Misc),
        ])
    }

    const MAP: &str = r#"(
        locations: [
            (
                name: "Yard",
                description: "Open ground.",
                range: Medium,
                high_traffic: true,
                exits: [("north", "Gate")],
                items: ["Bolts"],
                containers: [(name: "Crate", description: "Wooden.", items: ["Nuts", "Bolts"])],
            ),
            (
                name: "Gate",
                description: "Way out.",
                range: Long,
                extraction: true,
                exits: [("south", "Yard")],
            ),
        ],
    )"#;

    #[test]
    fn resolves_exits_and_loot() {
        let world = MapLoader::parse(MAP, &catalog()).unwrap();

        assert_eq!(world.len(), 2);
        let yard = &world[LocationId(0)];
        assert!(yard.high_traffic);
        assert!(!yard.extraction);
        assert_eq!(yard.exits[0].target, LocationId(1));
        assert_eq!(yard.items[0].name(), "Bolts");
        assert_eq!(yard.containers[0].items.len(), 2);
        assert!(!yard.containers[0].looted);

        let gate = &world[LocationId(1)];
        assert!(gate.extraction);
        assert!(gate.items.is_empty());
        assert_eq!(world.neighbor(LocationId(1), "south"), Some(LocationId(0)));
    }

    #[test]
    fn unknown_destination_fails() {
        let map = MAP.replace(r#"("north", "Gate")"#, r#"("north", "Nowhere")"#);
        let err = MapLoader::parse(&map, &catalog()).unwrap_err();
        assert!(err.to_string().contains("Nowhere"));
    }

    #[test]
    fn unknown_loot_fails() {
        let map = MAP.replace(r#"items: ["Bolts"]"#, r#"items: ["Gold Bar"]"#);
        let err = MapLoader::parse(&map, &catalog()).unwrap_err();
        assert!(format!("{err:#}").contains("Gold Bar"));
    }

    #[test]
    fn duplicate_location_fails() {
        let map = MAP.replace(r#"name: "Gate""#, r#"name: "Yard""#);
        assert!(MapLoader::parse(&map, &catalog()).is_err());
    }
}
