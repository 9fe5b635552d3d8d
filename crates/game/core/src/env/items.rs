use crate::state::{Item, RangeBand, Roubles, Weight};

use super::OracleError;

pub trait ItemOracle {
    /// Looks up a definition by its exact catalog name.
    fn definition(&self, name: &str) -> Option<&ItemDefinition>;

    /// Returns all item definitions available in this oracle.
    fn definitions(&self) -> Vec<&ItemDefinition>;

    /// Creates a fresh item instance from the catalog.
    fn instantiate(&self, name: &str) -> Result<Item, OracleError> {
        self.definition(name)
            .map(|definition| Item::new(definition.clone()))
            .ok_or_else(|| OracleError::UnknownItem(name.to_owned()))
    }
}

/// Item definition with common fields and type-specific data.
///
/// - Base struct holds fields shared by every item (name, weight, value)
/// - `kind` enum holds type-specific data (weapon stats, consumable effects, etc.)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub description: String,
    pub weight: Weight,
    /// Trader price in roubles.
    pub value: Roubles,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        weight: Weight,
        value: Roubles,
        kind: ItemKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            weight,
            value,
            kind,
        }
    }
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Equippable weapon.
    Weapon(WeaponData),

    /// Equippable body armor or helmet.
    Armor(ArmorData),

    /// Single-use medical or food item.
    Consumable(ConsumableData),

    /// Loot with no mechanical use beyond its value.
    Misc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponClass {
    #[strum(serialize = "melee")]
    Melee,
    #[strum(serialize = "ranged")]
    Ranged,
}

/// Weapon-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    pub damage: u32,
    pub class: WeaponClass,
    pub optimal_range: RangeBand,
    #[cfg_attr(feature = "serde", serde(default))]
    pub caliber: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmorSlot {
    #[strum(serialize = "body")]
    Body,
    #[strum(serialize = "head")]
    Head,
}

/// Armor-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorData {
    pub defense: u32,
    pub slot: ArmorSlot,
}

/// Consumable effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumableEffect {
    /// Restore health.
    #[strum(serialize = "heal")]
    Heal,

    /// Restore stamina.
    #[strum(serialize = "stamina")]
    StaminaRestore,

    /// Stop bleeding.
    #[strum(serialize = "cure bleeding")]
    CureBleeding,
}

/// Consumable-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableData {
    pub effect: ConsumableEffect,
    /// Health or stamina restored; ignored by cures.
    #[cfg_attr(feature = "serde", serde(default))]
    pub magnitude: u32,
}
