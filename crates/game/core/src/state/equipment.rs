use super::{HitZone, Item, Weight};
use crate::env::{ArmorSlot, ItemKind};
use crate::error::ActionError;

/// Equipment slot a wearable item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum EquipSlot {
    #[strum(serialize = "weapon")]
    Weapon,
    #[strum(serialize = "armor")]
    BodyArmor,
    #[strum(serialize = "helmet")]
    Helmet,
}

impl EquipSlot {
    /// Slot an item would be equipped into, if it is wearable.
    pub fn for_item(item: &Item) -> Option<Self> {
        match item.kind() {
            ItemKind::Weapon(_) => Some(Self::Weapon),
            ItemKind::Armor(armor) => Some(match armor.slot {
                ArmorSlot::Body => Self::BodyArmor,
                ArmorSlot::Head => Self::Helmet,
            }),
            _ => None,
        }
    }

    /// Parses the slot keywords accepted by `unequip`.
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword.trim().to_lowercase().as_str() {
            "weapon" | "gun" => Some(Self::Weapon),
            "armor" | "armour" | "body" | "vest" => Some(Self::BodyArmor),
            "helmet" | "head" => Some(Self::Helmet),
            _ => None,
        }
    }
}

/// Worn gear: at most one weapon, one body armor and one helmet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Equipment {
    weapon: Option<Item>,
    body_armor: Option<Item>,
    helmet: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::BodyArmor => self.body_armor.as_ref(),
            EquipSlot::Helmet => self.helmet.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Item> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::BodyArmor => &mut self.body_armor,
            EquipSlot::Helmet => &mut self.helmet,
        }
    }

    pub fn weapon(&self) -> Option<&Item> {
        self.weapon.as_ref()
    }

    pub fn body_armor(&self) -> Option<&Item> {
        self.body_armor.as_ref()
    }

    pub fn helmet(&self) -> Option<&Item> {
        self.helmet.as_ref()
    }

    pub fn has_helmet(&self) -> bool {
        self.helmet.is_some()
    }

    /// Places `item` in its slot and returns whatever it replaced.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, ActionError> {
        let slot = EquipSlot::for_item(&item).ok_or_else(|| ActionError::IllegalEquip {
            item: item.name().to_owned(),
        })?;
        Ok(self.slot_mut(slot).replace(item))
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Occupied slots in weapon, armor, helmet order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        [
            (EquipSlot::Weapon, &self.weapon),
            (EquipSlot::BodyArmor, &self.body_armor),
            (EquipSlot::Helmet, &self.helmet),
        ]
        .into_iter()
        .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    /// Finds an equipped item by typed name.
    pub fn find(&self, query: &str) -> Result<EquipSlot, ActionError> {
        let worn: Vec<(EquipSlot, &Item)> = self.iter().collect();
        let index = super::resolve_name(worn.iter().map(|(_, item)| item.name()), query)?;
        Ok(worn[index].0)
    }

    pub fn weight(&self) -> Weight {
        self.iter().map(|(_, item)| item.weight()).sum()
    }

    /// Armor defense covering `zone`.
    pub fn defense(&self, zone: HitZone) -> u32 {
        let piece = match zone {
            HitZone::Head => &self.helmet,
            HitZone::Body => &self.body_armor,
        };
        piece
            .as_ref()
            .and_then(Item::as_armor)
            .map_or(0, |armor| armor.defense)
    }

    /// Removes every worn item in weapon, armor, helmet order.
    pub fn strip(&mut self) -> Vec<Item> {
        [
            self.weapon.take(),
            self.body_armor.take(),
            self.helmet.take(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Builder for pre-equipped loadouts such as spawned enemies.
#[derive(Debug, Default)]
pub struct EquipmentBuilder {
    equipment: Equipment,
}

impl EquipmentBuilder {
    /// Wears `item` if it fits a slot; other items are ignored.
    pub fn wear(mut self, item: Option<Item>) -> Self {
        if let Some(item) = item
            && let Some(slot) = EquipSlot::for_item(&item)
        {
            *self.equipment.slot_mut(slot) = Some(item);
        }
        self
    }

    pub fn build(self) -> Equipment {
        self.equipment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn equip_swaps_and_returns_previous() {
        let mut equipment = Equipment::new();
        assert_eq!(equipment.equip(fixtures::item("Makarov PM")), Ok(None));

        let previous = equipment.equip(fixtures::item("AKM")).unwrap();
        assert_eq!(previous.map(|i| i.name().to_owned()), Some("Makarov PM".into()));
        assert_eq!(equipment.weapon().map(Item::name), Some("AKM"));
    }

    #[test]
    fn non_wearables_are_rejected() {
        let mut equipment = Equipment::new();
        let err = equipment.equip(fixtures::item("Bandage")).unwrap_err();
        assert_eq!(
            err,
            ActionError::IllegalEquip {
                item: "Bandage".into()
            }
        );
        assert_eq!(equipment.weight(), Weight::ZERO);
    }

    #[test]
    fn armor_lands_in_matching_slot() {
        let equipment = Equipment::builder()
            .wear(Some(fixtures::item("PACA Body Armor")))
            .wear(Some(fixtures::item("SSh-68 Helmet")))
            .build();
        assert_eq!(equipment.defense(HitZone::Body), 5);
        assert_eq!(equipment.defense(HitZone::Head), 3);
        assert!(equipment.has_helmet());
        assert_eq!(equipment.find("ssh"), Ok(EquipSlot::Helmet));
        assert_eq!(EquipSlot::parse("Head"), Some(EquipSlot::Helmet));
    }
}
