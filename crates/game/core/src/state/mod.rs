//! Authoritative game state representation.
//!
//! This module owns the data structures that describe items, characters and
//! the raid map. The session mutates them in response to player commands;
//! runtime layers only read them.
mod character;
mod common;
mod enemy;
mod equipment;
mod inventory;
mod item;
mod player;
mod world;

pub use character::{Combatant, DamageReport, EnemyCondition, HealthStatus, StaminaStatus};
pub use common::{
    Describe, HitZone, LocationRange, RangeBand, ResourceMeter, Roubles, Weight, resolve_name,
};
pub use enemy::{Enemy, EnemyTier};
pub use equipment::{EquipSlot, Equipment, EquipmentBuilder};
pub use inventory::ItemBag;
pub use item::Item;
pub use player::{ConsumableUse, Player};
pub use world::{Container, Exit, Location, LocationId, WorldGraph};
