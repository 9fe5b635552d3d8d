use crate::state::Weight;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of actions a raid lasts before the player is caught out.
    pub raid_actions: u32,
}

impl GameConfig {
    // ===== player =====
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    pub const PLAYER_MAX_STAMINA: u32 = 100;
    /// Damage dealt with bare hands when no weapon is equipped.
    pub const PLAYER_BASE_DAMAGE: u32 = 5;
    pub const PLAYER_BASE_DEFENSE: u32 = 0;
    pub const PLAYER_CARRY_CAPACITY: Weight = Weight::from_kg(50);
    pub const STASH_CAPACITY: Weight = Weight::from_kg(200);

    // ===== stamina economy =====
    pub const MOVE_STAMINA_COST: u32 = 15;
    pub const MOVE_STAMINA_REGEN: u32 = 5;
    pub const FLEE_STAMINA_REGEN: u32 = 10;
    pub const COMBAT_STAMINA_REGEN: u32 = 5;
    pub const REST_STAMINA_RESTORE: u32 = 40;

    // ===== bleeding =====
    pub const BLEED_DAMAGE_MIN: u32 = 2;
    pub const BLEED_DAMAGE_MAX: u32 = 5;

    // ===== hideout economy =====
    /// Traders buy items back at `value / SELL_DIVISOR`.
    pub const SELL_DIVISOR: u32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RAID_ACTIONS: u32 = 100;

    pub fn new() -> Self {
        Self {
            raid_actions: Self::DEFAULT_RAID_ACTIONS,
        }
    }

    pub fn with_raid_actions(raid_actions: u32) -> Self {
        Self {
            raid_actions: raid_actions.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
