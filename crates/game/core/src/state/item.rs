use std::sync::Arc;

use super::{Describe, Roubles, Weight};
use crate::env::{ArmorData, ArmorSlot, ConsumableData, ItemDefinition, ItemKind, WeaponData};

/// An item instance somewhere in the game.
///
/// Items are immutable once created. Clones share the underlying definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    definition: Arc<ItemDefinition>,
}

impl Item {
    pub fn new(definition: ItemDefinition) -> Self {
        Self {
            definition: Arc::new(definition),
        }
    }

    pub fn definition(&self) -> &ItemDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn description(&self) -> &str {
        &self.definition.description
    }

    pub fn weight(&self) -> Weight {
        self.definition.weight
    }

    pub fn value(&self) -> Roubles {
        self.definition.value
    }

    pub fn kind(&self) -> &ItemKind {
        &self.definition.kind
    }

    pub fn as_weapon(&self) -> Option<&WeaponData> {
        match &self.definition.kind {
            ItemKind::Weapon(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorData> {
        match &self.definition.kind {
            ItemKind::Armor(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_consumable(&self) -> Option<&ConsumableData> {
        match &self.definition.kind {
            ItemKind::Consumable(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_equippable(&self) -> bool {
        matches!(self.definition.kind, ItemKind::Weapon(_) | ItemKind::Armor(_))
    }
}

impl Describe for Item {
    /// Weapon damage and armor defense stay hidden; the player learns them in a fight.
    fn get_info(&self) -> String {
        let base = format!(
            "{}: {} (Weight: {})",
            self.name(),
            self.description(),
            self.weight()
        );
        match self.kind() {
            ItemKind::Weapon(weapon) => {
                let mut info = format!(
                    "{base}, Type: {}, Optimal Range: {}",
                    weapon.class, weapon.optimal_range
                );
                if let Some(caliber) = &weapon.caliber {
                    info.push_str(&format!(", Caliber: {caliber}"));
                }
                info
            }
            ItemKind::Armor(armor) => {
                let slot = match armor.slot {
                    ArmorSlot::Body => "body armor",
                    ArmorSlot::Head => "helmet",
                };
                format!("{base}, Slot: {slot}")
            }
            ItemKind::Consumable(consumable) => {
                if consumable.magnitude > 0 {
                    format!(
                        "{base}, Effect: {} {}",
                        consumable.effect, consumable.magnitude
                    )
                } else {
                    format!("{base}, Effect: {}", consumable.effect)
                }
            }
            ItemKind::Misc => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn weapon_info_hides_damage() {
        let info = fixtures::item("AKM").get_info();
        assert!(info.starts_with("AKM: "));
        assert!(info.contains("Optimal Range: medium"));
        assert!(info.contains("Caliber: 7.62x39mm"));
        assert!(!info.contains("35"));
    }

    #[test]
    fn armor_info_names_slot() {
        let info = fixtures::item("SSh-68 Helmet").get_info();
        assert!(info.contains("Slot: helmet"));
        assert!(fixtures::item("SSh-68 Helmet").is_equippable());
        assert!(!fixtures::item("Bandage").is_equippable());
    }
}
