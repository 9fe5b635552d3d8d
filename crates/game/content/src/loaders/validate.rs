//! Cross-file consistency checks.
//!
//! Each loader only sees its own document. These checks run over the
//! assembled snapshot and catch references between files that do not line up.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use anyhow::Context;
use game_core::{
    ArmorSlot, ConfigOracle, EnemyTier, EquipSlot, GearPool, ItemKind, ItemOracle, LocationId,
    NpcOracle, OracleSnapshot, WorldGraph,
};
use strum::IntoEnumIterator;

use crate::loaders::LoadResult;

/// Checks that the world is escapable and that every name resolves to an item
/// of the right kind.
pub fn validate_snapshot(snapshot: &OracleSnapshot) -> LoadResult<()> {
    validate_world(&snapshot.world)?;
    validate_pools(&snapshot.npcs, &snapshot.items)?;
    validate_economy(&snapshot.config, &snapshot.items)?;
    Ok(())
}

fn validate_world(world: &WorldGraph) -> LoadResult<()> {
    if world.is_empty() {
        anyhow::bail!("World has no locations");
    }
    if !world.iter().any(|location| location.extraction) {
        anyhow::bail!("World has no extraction point");
    }
    if let Some(location) = world.iter().find(|location| location.exits.is_empty()) {
        anyhow::bail!("Location '{}' has no exits", location.name);
    }

    // Walk exits backwards from every extraction point.
    let mut incoming: BTreeMap<LocationId, Vec<LocationId>> = BTreeMap::new();
    for location in world.iter() {
        for exit in &location.exits {
            incoming.entry(exit.target).or_default().push(location.id);
        }
    }
    let mut escapable: BTreeSet<LocationId> = world
        .iter()
        .filter(|location| location.extraction)
        .map(|location| location.id)
        .collect();
    let mut queue: VecDeque<LocationId> = escapable.iter().copied().collect();
    while let Some(id) = queue.pop_front() {
        for &from in incoming.get(&id).into_iter().flatten() {
            if escapable.insert(from) {
                queue.push_back(from);
            }
        }
    }
    if let Some(trapped) = world.iter().find(|location| !escapable.contains(&location.id)) {
        anyhow::bail!("No extraction point is reachable from '{}'", trapped.name);
    }
    Ok(())
}

fn validate_pools(npcs: &dyn NpcOracle, items: &dyn ItemOracle) -> LoadResult<()> {
    let mut owner: BTreeMap<&str, EnemyTier> = BTreeMap::new();
    for tier in EnemyTier::iter() {
        let pool = npcs.gear_pool(tier);
        check_pool(tier, pool, items).with_context(|| format!("Gear pool of the {tier} tier"))?;
        for name in pool.item_names() {
            match owner.insert(name, tier) {
                Some(other) if other != tier => {
                    anyhow::bail!("'{}' appears in both the {} and {} gear pools", name, other, tier);
                }
                _ => {}
            }
        }
    }
    for name in npcs.common_loot() {
        items.instantiate(name).context("Common enemy loot")?;
    }
    Ok(())
}

fn check_pool(tier: EnemyTier, pool: &GearPool, items: &dyn ItemOracle) -> LoadResult<()> {
    if pool.weapons.is_empty() {
        anyhow::bail!("No weapons to hand out");
    }
    // Only regulars may spawn without armor.
    if tier != EnemyTier::Regular {
        for (what, slots) in [("body armor", &pool.body_armor), ("helmets", &pool.helmets)] {
            if slots.is_empty() || slots.iter().any(Option::is_none) {
                anyhow::bail!("Every {} enemy must wear {}", tier, what);
            }
        }
    }
    for name in &pool.weapons {
        expect_kind(items, name, "a weapon", |kind| matches!(kind, ItemKind::Weapon(_)))?;
    }
    for name in pool.body_armor.iter().flatten() {
        expect_kind(items, name, "body armor", |kind| {
            matches!(kind, ItemKind::Armor(armor) if armor.slot == ArmorSlot::Body)
        })?;
    }
    for name in pool.helmets.iter().flatten() {
        expect_kind(items, name, "a helmet", |kind| {
            matches!(kind, ItemKind::Armor(armor) if armor.slot == ArmorSlot::Head)
        })?;
    }
    Ok(())
}

fn expect_kind(
    items: &dyn ItemOracle,
    name: &str,
    expected: &str,
    matches: impl Fn(&ItemKind) -> bool,
) -> LoadResult<()> {
    let definition = items
        .definition(name)
        .ok_or_else(|| anyhow::anyhow!("Item '{}' is not in the catalog", name))?;
    if !matches(&definition.kind) {
        anyhow::bail!("'{}' is not {}", name, expected);
    }
    Ok(())
}

fn validate_economy(config: &dyn ConfigOracle, items: &dyn ItemOracle) -> LoadResult<()> {
    let kit = config.starting_kit();
    let mut slots = HashSet::new();
    for name in &kit.equipped {
        let item = items.instantiate(name).context("Starting kit")?;
        let slot = EquipSlot::for_item(&item)
            .ok_or_else(|| anyhow::anyhow!("Starting kit equips '{}', which cannot be worn", name))?;
        if !slots.insert(slot) {
            anyhow::bail!("Starting kit equips two items in the {} slot", slot);
        }
    }
    for name in kit.inventory.iter().chain(&kit.stash) {
        items.instantiate(name).context("Starting kit")?;
    }
    for name in config.trader_stock() {
        items.instantiate(name).context("Trader stock")?;
    }
    Ok(())
}
