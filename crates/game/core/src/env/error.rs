//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
///
/// Oracle errors indicate that content references something the catalog does
/// not define. They surface while building worlds, enemies or starting kits.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// Item definition was not found by name.
    #[error("item '{0}' is not in the catalog")]
    UnknownItem(String),

    /// Starting kit names an item that cannot be worn.
    #[error("starting kit equips '{0}', which is not a weapon or armor")]
    UnwearableKitItem(String),

    /// Starting kit equips two items in the same slot.
    #[error("starting kit equips '{0}' in a slot that is already taken")]
    KitSlotTaken(String),

    /// The world blueprint has no locations to start a raid in.
    #[error("world blueprint has no locations")]
    EmptyWorld,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownItem(_) | Self::UnwearableKitItem(_) | Self::KitSlotTaken(_) => {
                ErrorSeverity::Validation
            }
            Self::EmptyWorld => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem(_) => "ORACLE_UNKNOWN_ITEM",
            Self::UnwearableKitItem(_) => "ORACLE_UNWEARABLE_KIT_ITEM",
            Self::KitSlotTaken(_) => "ORACLE_KIT_SLOT_TAKEN",
            Self::EmptyWorld => "ORACLE_EMPTY_WORLD",
        }
    }
}
