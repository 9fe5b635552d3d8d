use super::{
    Combatant, DamageReport, Describe, EnemyCondition, Equipment, HitZone, Item, ResourceMeter,
};
use crate::combat::damage;
use crate::env::Chance;

/// Enemy strength tier, rolled when an enemy spawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyTier {
    #[strum(serialize = "regular")]
    Regular,
    #[strum(serialize = "armored")]
    Armored,
    #[strum(serialize = "elite")]
    Elite,
}

/// A hostile character placed in a location by the encounter generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    name: String,
    tier: EnemyTier,
    pub health: ResourceMeter,
    damage: u32,
    base_defense: u32,
    hit_chance: Chance,
    pub equipment: Equipment,
    pub loot: Vec<Item>,
}

impl Enemy {
    pub fn new(
        name: impl Into<String>,
        tier: EnemyTier,
        health: u32,
        damage: u32,
        hit_chance: Chance,
    ) -> Self {
        Self {
            name: name.into(),
            tier,
            health: ResourceMeter::full(health),
            damage,
            base_defense: 0,
            hit_chance,
            equipment: Equipment::new(),
            loot: Vec::new(),
        }
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_loot(mut self, loot: Vec<Item>) -> Self {
        self.loot = loot;
        self
    }

    pub fn tier(&self) -> EnemyTier {
        self.tier
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn hit_chance(&self) -> Chance {
        self.hit_chance
    }

    pub fn condition(&self) -> EnemyCondition {
        EnemyCondition::from_meter(&self.health)
    }

    /// Everything the body drops: worn gear first, then carried loot.
    pub fn into_drops(mut self) -> Vec<Item> {
        let mut drops = self.equipment.strip();
        drops.append(&mut self.loot);
        drops
    }
}

impl Combatant for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &ResourceMeter {
        &self.health
    }

    fn take_damage(&mut self, amount: u32, zone: HitZone) -> DamageReport {
        let defense = self.base_defense + self.equipment.defense(zone);
        let mut effective = damage::mitigate(amount, defense);
        if zone == HitZone::Head && !self.equipment.has_helmet() {
            effective = damage::enemy_unprotected_head(effective);
        }
        let was_alive = self.is_alive();
        let effective = self.health.deplete(effective);
        DamageReport {
            effective,
            killed: was_alive && !self.is_alive(),
        }
    }
}

impl Describe for Enemy {
    fn get_info(&self) -> String {
        format!("{} ({} enemy)", self.name, self.tier)
    }
}
