//! Rules of a turn-based survival-extraction game.
//!
//! `game-core` defines the canonical rules (combat, encounters, raid and
//! hideout flow) and exposes pure APIs that the runtime and client build on.
//! Every player action flows through [`session::Session::perform`], which
//! mutates the in-memory state and reports what happened as events plus an
//! optional save request. The crate performs no I/O of its own.
pub mod combat;
pub mod config;
pub mod encounter;
pub mod env;
pub mod error;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;

pub use combat::{
    AttackResult, CombatChoice, CombatDecider, CombatEvent, CombatOutcome, CombatReport,
    CombatView, FixedAim, RoundOutcome, resolve_combat, resolve_round,
};
pub use config::GameConfig;
pub use env::{
    ArmorData, ArmorSlot, Chance, ConfigOracle, ConfigSnapshot, ConsumableData, ConsumableEffect,
    GameEnv, GearPool, ItemDefinition, ItemKind, ItemOracle, ItemsSnapshot, MapOracle, NpcOracle,
    NpcSnapshot, OracleError, OracleSnapshot, PcgRng, RandomSource, ScriptedRng, StartingKit,
    WeaponClass, WeaponData,
};
pub use error::{ActionError, ErrorKind, ErrorSeverity, GameError};
pub use session::{
    Command, ExitView, GameEvent, InventoryView, LocationView, Offer, Phase, ProfileError,
    ProfileRecord, RaidOutcome, RaidState, SaveRequest, Session, ShopOrder, StatsView,
    StorageOrder, TurnReport,
};
pub use state::{
    Combatant, ConsumableUse, Container, Describe, Enemy, EnemyCondition, EnemyTier, EquipSlot,
    Equipment, Exit, HealthStatus, HitZone, Item, ItemBag, Location, LocationId, LocationRange,
    Player, RangeBand, ResourceMeter, Roubles, StaminaStatus, Weight, WorldGraph,
};
