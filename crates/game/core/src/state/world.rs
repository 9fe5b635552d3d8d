use super::{Describe, Enemy, Item, LocationRange, resolve_name};
use crate::error::ActionError;

/// Index of a location inside its [`WorldGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocationId(pub u16);

impl LocationId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Searchable container holding loot.
///
/// Once marked looted it stays looted for the rest of the raid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    pub description: String,
    pub items: Vec<Item>,
    pub looted: bool,
}

impl Container {
    pub fn new(name: impl Into<String>, description: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            items,
            looted: false,
        }
    }
}

impl Describe for Container {
    fn get_info(&self) -> String {
        if self.looted {
            format!("{}: {} (empty)", self.name, self.description)
        } else {
            format!("{}: {}", self.name, self.description)
        }
    }
}

/// A named exit leading to another location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub target: LocationId,
}

/// One node of the raid map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub range: LocationRange,
    pub high_traffic: bool,
    pub extraction: bool,
    pub visited: bool,
    pub exits: Vec<Exit>,
    pub items: Vec<Item>,
    pub enemies: Vec<Enemy>,
    pub containers: Vec<Container>,
}

impl Location {
    pub fn new(
        id: LocationId,
        name: impl Into<String>,
        description: impl Into<String>,
        range: LocationRange,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            range,
            high_traffic: false,
            extraction: false,
            visited: false,
            exits: Vec::new(),
            items: Vec::new(),
            enemies: Vec::new(),
            containers: Vec::new(),
        }
    }

    pub fn has_enemies(&self) -> bool {
        !self.enemies.is_empty()
    }

    /// Resolves a typed direction to an exit.
    pub fn exit(&self, query: &str) -> Result<&Exit, ActionError> {
        let index = resolve_name(self.exits.iter().map(|exit| exit.direction.as_str()), query)?;
        Ok(&self.exits[index])
    }

    pub fn find_item(&self, query: &str) -> Result<usize, ActionError> {
        resolve_name(self.items.iter().map(Item::name), query)
    }

    pub fn find_enemy(&self, query: &str) -> Result<usize, ActionError> {
        resolve_name(
            self.enemies.iter().map(|enemy| super::Combatant::name(enemy)),
            query,
        )
    }

    pub fn find_container(&self, query: &str) -> Result<usize, ActionError> {
        resolve_name(self.containers.iter().map(|c| c.name.as_str()), query)
    }
}

/// Directed graph of locations making up one raid map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldGraph {
    locations: Vec<Location>,
}

impl WorldGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a location, assigning it the next id.
    pub fn add(&mut self, mut location: Location) -> LocationId {
        let id = LocationId(self.locations.len() as u16);
        location.id = id;
        self.locations.push(location);
        id
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Location> {
        self.locations.iter_mut()
    }

    pub fn find_by_name(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .find(|location| location.name == name)
            .map(|location| location.id)
    }

    /// Target of `direction` from `from`, if that exit exists.
    pub fn neighbor(&self, from: LocationId, direction: &str) -> Option<LocationId> {
        self.get(from)?
            .exits
            .iter()
            .find(|exit| exit.direction == direction)
            .map(|exit| exit.target)
    }
}

impl core::ops::Index<LocationId> for WorldGraph {
    type Output = Location;

    fn index(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }
}

impl core::ops::IndexMut<LocationId> for WorldGraph {
    fn index_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn add_assigns_sequential_ids() {
        let mut world = WorldGraph::new();
        let a = world.add(Location::new(
            LocationId(99),
            "A",
            "first",
            LocationRange::Short,
        ));
        let b = world.add(Location::new(LocationId(0), "B", "second", LocationRange::Long));
        assert_eq!((a, b), (LocationId(0), LocationId(1)));
        assert_eq!(world[b].id, b);
        assert_eq!(world.find_by_name("A"), Some(a));
    }

    #[test]
    fn exits_resolve_by_prefix() {
        let world = fixtures::world();
        let yard = world.find_by_name("Yard").unwrap();
        let exit = world[yard].exit("nor").unwrap();
        assert_eq!(world[exit.target].name, "Office");
        assert_eq!(world.neighbor(yard, "north"), Some(exit.target));
        assert!(matches!(
            world[yard].exit("up"),
            Err(ActionError::NoTarget { .. })
        ));
    }
}
