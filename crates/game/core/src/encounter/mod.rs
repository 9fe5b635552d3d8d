//! Enemy generation.
//!
//! [`repopulate`] rolls fresh enemy groups into every eligible location of a
//! raid map. Tier odds and stat ranges are fixed here; names, weapons, armor
//! and loot come from the [`NpcOracle`](crate::env::NpcOracle).

use crate::env::{Chance, GameEnv, RandomSource};
use crate::state::{Enemy, EnemyTier, Equipment, Item, Location, LocationId, WorldGraph};

pub const SPAWN_CHANCE_UNVISITED: Chance = Chance::percent(40);
pub const SPAWN_CHANCE_VISITED: Chance = Chance::percent(15);
pub const HIGH_TRAFFIC_BONUS_BP: i32 = 2_000;
pub const MIN_GROUP_SIZE: i32 = 1;
pub const MAX_GROUP_SIZE: i32 = 3;

/// Tier rolls below this many basis points spawn an elite.
pub const ELITE_THRESHOLD: u32 = 1_500;
/// Tier rolls below this (and not elite) spawn an armored enemy.
pub const ARMORED_THRESHOLD: u32 = 4_000;

/// Inclusive stat ranges an enemy tier rolls from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierProfile {
    pub health: (u32, u32),
    pub damage: (u32, u32),
    pub hit_chance: (Chance, Chance),
    pub loot: (u32, u32),
}

impl EnemyTier {
    pub const fn profile(self) -> TierProfile {
        match self {
            Self::Elite => TierProfile {
                health: (150, 250),
                damage: (25, 45),
                hit_chance: (Chance::percent(60), Chance::percent(85)),
                loot: (2, 4),
            },
            Self::Armored => TierProfile {
                health: (70, 120),
                damage: (18, 25),
                hit_chance: (Chance::percent(55), Chance::percent(55)),
                loot: (1, 3),
            },
            Self::Regular => TierProfile {
                health: (40, 70),
                damage: (10, 18),
                hit_chance: (Chance::percent(45), Chance::percent(45)),
                loot: (0, 2),
            },
        }
    }

    /// Maps a roll in basis points to a tier.
    pub const fn from_roll(roll: u32) -> Self {
        if roll < ELITE_THRESHOLD {
            Self::Elite
        } else if roll < ARMORED_THRESHOLD {
            Self::Armored
        } else {
            Self::Regular
        }
    }

    /// Name used when the content gives the tier no names.
    pub const fn fallback_name(self) -> &'static str {
        match self {
            Self::Elite => "Elite Scav",
            Self::Armored => "Armored Scav",
            Self::Regular => "Scav",
        }
    }
}

/// Enemies placed into one location by [`repopulate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnReport {
    pub location: LocationId,
    pub enemies: Vec<String>,
}

/// Spawn odds for a location on this pass.
pub fn spawn_chance(location: &Location) -> Chance {
    let base = if location.visited {
        SPAWN_CHANCE_VISITED
    } else {
        SPAWN_CHANCE_UNVISITED
    };
    if location.high_traffic {
        base.offset(HIGH_TRAFFIC_BONUS_BP)
    } else {
        base
    }
}

/// Rolls new enemy groups into every empty, non-extraction location.
///
/// Locations are visited in id order and each draws its own spawn roll, so a
/// seeded source reproduces the same map.
pub fn repopulate(
    world: &mut WorldGraph,
    env: &GameEnv<'_>,
    rng: &mut dyn RandomSource,
) -> Vec<SpawnReport> {
    let mut reports = Vec::new();
    for location in world.iter_mut() {
        if location.extraction || location.has_enemies() {
            continue;
        }
        if !rng.check(spawn_chance(location)) {
            continue;
        }
        let count = rng.range(MIN_GROUP_SIZE, MAX_GROUP_SIZE);
        location.enemies = (0..count).map(|_| spawn_enemy(env, rng)).collect();
        reports.push(SpawnReport {
            location: location.id,
            enemies: location
                .enemies
                .iter()
                .map(|enemy| crate::state::Combatant::name(enemy).to_owned())
                .collect(),
        });
    }
    reports
}

/// Rolls a tier and builds one enemy of it.
pub fn spawn_enemy(env: &GameEnv<'_>, rng: &mut dyn RandomSource) -> Enemy {
    let tier = EnemyTier::from_roll(rng.roll());
    spawn_enemy_of(tier, env, rng)
}

/// Builds one enemy of `tier`: stats from its profile, gear and loot from content.
pub fn spawn_enemy_of(tier: EnemyTier, env: &GameEnv<'_>, rng: &mut dyn RandomSource) -> Enemy {
    let profile = tier.profile();
    let pool = env.npcs().gear_pool(tier);

    let name = choose(&pool.names, rng).map_or(tier.fallback_name(), String::as_str);
    let health = roll_between(profile.health, rng);
    let damage = roll_between(profile.damage, rng);
    let hit_chance = Chance::from_bp(roll_between(
        (profile.hit_chance.0.bp(), profile.hit_chance.1.bp()),
        rng,
    ));

    let weapon = choose(&pool.weapons, rng).and_then(|name| instantiate(env, name));
    let body_armor = choose(&pool.body_armor, rng)
        .and_then(Option::as_deref)
        .and_then(|name| instantiate(env, name));
    let helmet = choose(&pool.helmets, rng)
        .and_then(Option::as_deref)
        .and_then(|name| instantiate(env, name));

    let loot_count = roll_between(profile.loot, rng) as usize;
    let loot = sample_loot(env, loot_count, rng);

    Enemy::new(name, tier, health, damage, hit_chance)
        .with_equipment(
            Equipment::builder()
                .wear(weapon)
                .wear(body_armor)
                .wear(helmet)
                .build(),
        )
        .with_loot(loot)
}

fn roll_between((min, max): (u32, u32), rng: &mut dyn RandomSource) -> u32 {
    let min = min.min(i32::MAX as u32) as i32;
    let max = max.min(i32::MAX as u32) as i32;
    rng.range(min, max).max(0) as u32
}

fn choose<'a, T>(pool: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.pick(pool.len()))
}

fn instantiate(env: &GameEnv<'_>, name: &str) -> Option<Item> {
    env.items().instantiate(name).ok()
}

/// Draws `count` distinct entries of the common loot table.
fn sample_loot(env: &GameEnv<'_>, count: usize, rng: &mut dyn RandomSource) -> Vec<Item> {
    let mut remaining: Vec<&String> = env.npcs().common_loot().iter().collect();
    let mut loot = Vec::with_capacity(count);
    for _ in 0..count.min(remaining.len()) {
        let name = remaining.swap_remove(rng.pick(remaining.len()));
        if let Some(item) = instantiate(env, name) {
            loot.push(item);
        }
    }
    loot
}
