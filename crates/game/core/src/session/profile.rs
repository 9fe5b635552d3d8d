//! Persisted profile records.
//!
//! A [`ProfileRecord`] is the only state that outlives the process. Items are
//! stored by catalog name and re-instantiated through the [`ItemOracle`] when
//! a profile is loaded.

use crate::env::{ItemOracle, OracleError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EquipSlot, Item, Roubles, Weight};

/// Snapshot of everything that survives between sessions.
///
/// A raid checkpoint leaves `inventory` empty and every equipped slot `None`,
/// so a crash mid-raid loses the carried gear just like dying does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileRecord {
    pub roubles: Roubles,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stash: Vec<String>,
    pub health: u32,
    pub stamina: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bleeding: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub raids_survived: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub inventory: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub equipped_weapon: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub equipped_armor: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub equipped_helmet: Option<String>,
}

impl ProfileRecord {
    /// Record without carried or worn gear.
    pub fn without_gear(mut self) -> Self {
        self.inventory.clear();
        self.equipped_weapon = None;
        self.equipped_armor = None;
        self.equipped_helmet = None;
        self
    }

    pub fn equipped(&self) -> impl Iterator<Item = (EquipSlot, &str)> {
        [
            (EquipSlot::Weapon, &self.equipped_weapon),
            (EquipSlot::BodyArmor, &self.equipped_armor),
            (EquipSlot::Helmet, &self.equipped_helmet),
        ]
        .into_iter()
        .filter_map(|(slot, name)| name.as_deref().map(|name| (slot, name)))
    }

    pub fn has_gear(&self) -> bool {
        !self.inventory.is_empty() || self.equipped().next().is_some()
    }
}

/// A stored profile that no longer matches the item catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("'{item}' cannot be worn in the {slot} slot")]
    SlotMismatch { item: String, slot: EquipSlot },

    #[error("'{item}' does not fit within {capacity}")]
    OverCapacity { item: String, capacity: Weight },
}

impl ProfileError {
    pub(crate) fn over_capacity(item: &Item, capacity: Weight) -> Self {
        Self::OverCapacity {
            item: item.name().to_owned(),
            capacity,
        }
    }
}

impl GameError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::SlotMismatch { .. } => "PROFILE_SLOT_MISMATCH",
            Self::OverCapacity { .. } => "PROFILE_OVER_CAPACITY",
        }
    }
}

/// Instantiates every name, failing on the first unknown one.
pub(crate) fn instantiate_all<'a>(
    items: &dyn ItemOracle,
    names: impl IntoIterator<Item = &'a String>,
) -> Result<Vec<Item>, OracleError> {
    names.into_iter().map(|name| items.instantiate(name)).collect()
}
