//! Structured results of a player action.
//!
//! The session never formats text for the console beyond item info lines; the
//! client renders these events however it likes.

use super::ProfileRecord;
use crate::combat::CombatEvent;
use crate::error::ActionError;
use crate::state::{
    ConsumableUse, EquipSlot, HealthStatus, LocationRange, Roubles, StaminaStatus, Weight,
};

/// How a raid ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RaidOutcome {
    Extracted,
    Died,
    TimedOut,
}

impl RaidOutcome {
    /// Whether the carried gear is kept.
    pub const fn keeps_gear(self) -> bool {
        matches!(self, Self::Extracted)
    }
}

/// State the runtime should write to disk after this action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveRequest {
    /// Pre-raid state without carried gear, written when a raid starts.
    Checkpoint(ProfileRecord),
    /// Full state after a hideout change or a successful extraction.
    Commit(ProfileRecord),
}

impl SaveRequest {
    pub fn record(&self) -> &ProfileRecord {
        match self {
            Self::Checkpoint(record) | Self::Commit(record) => record,
        }
    }

    pub fn into_record(self) -> ProfileRecord {
        match self {
            Self::Checkpoint(record) | Self::Commit(record) => record,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Checkpoint(_) => "checkpoint",
            Self::Commit(_) => "commit",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExitView {
    pub direction: String,
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationView {
    pub name: String,
    pub description: String,
    pub range: LocationRange,
    pub extraction: bool,
    /// Info lines of the items on the ground.
    pub items: Vec<String>,
    pub containers: Vec<String>,
    pub enemies: Vec<String>,
    pub exits: Vec<ExitView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryView {
    pub equipped: Vec<(EquipSlot, String)>,
    /// Info lines of the backpack contents.
    pub items: Vec<String>,
    pub carried: Weight,
    pub capacity: Weight,
    pub roubles: Roubles,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsView {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub health_status: HealthStatus,
    pub stamina: u32,
    pub max_stamina: u32,
    pub stamina_status: StaminaStatus,
    pub bleeding: bool,
    pub weapon: Option<String>,
    pub body_armor: Option<String>,
    pub helmet: Option<String>,
    pub carried: Weight,
    pub capacity: Weight,
    pub roubles: Roubles,
    pub raids_survived: u32,
    /// Actions left before the raid times out; `None` in the hideout.
    pub raid_actions_left: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Offer {
    pub item: String,
    pub price: Roubles,
    pub info: String,
}

/// Something the player should be told about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RaidStarted {
        location: String,
        actions: u32,
    },
    LocationShown(LocationView),
    Moved {
        direction: String,
        destination: String,
    },
    /// Enemies appeared where the player is standing.
    EnemiesSpotted {
        enemies: Vec<String>,
    },
    Ambush {
        enemies: Vec<String>,
    },
    CombatStarted {
        enemy: String,
    },
    Combat(CombatEvent),
    /// A defeated enemy's gear and loot fell to the ground.
    EnemyLooted {
        enemy: String,
        items: Vec<String>,
    },
    AreaCleared,
    ItemTaken {
        item: String,
    },
    ItemDropped {
        item: String,
    },
    Equipped {
        item: String,
        slot: EquipSlot,
        replaced: Option<String>,
    },
    Unequipped {
        item: String,
        slot: EquipSlot,
    },
    ConsumableUsed(ConsumableUse),
    ContainerSearched {
        container: String,
        found: Vec<String>,
        /// Items that did not fit and stay in the container.
        left_behind: Vec<String>,
    },
    ContainerEmpty {
        container: String,
    },
    Rested {
        restored: u32,
        stamina: u32,
    },
    AlreadyRested,
    ItemInfo {
        info: String,
    },
    InventoryShown(InventoryView),
    StatsShown(StatsView),
    HelpRequested {
        in_raid: bool,
    },
    Bled {
        damage: u32,
        health: u32,
    },
    CountdownTick {
        remaining: u32,
    },
    RaidEnded {
        outcome: RaidOutcome,
        /// Gear left behind on death or timeout.
        lost: Vec<String>,
    },
    ShopShown {
        offers: Vec<Offer>,
        roubles: Roubles,
    },
    Purchased {
        item: String,
        price: Roubles,
        balance: Roubles,
    },
    Sold {
        item: String,
        price: Roubles,
        balance: Roubles,
    },
    StashShown {
        items: Vec<String>,
        weight: Weight,
        capacity: Weight,
    },
    Deposited {
        item: String,
    },
    Withdrawn {
        item: String,
    },
    QuitRequested,
}

/// Everything one call to [`Session::perform`](super::Session::perform) produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub events: Vec<GameEvent>,
    /// Why the command was refused, if it was.
    pub rejection: Option<ActionError>,
    pub save: Option<SaveRequest>,
    pub outcome: Option<RaidOutcome>,
}

impl TurnReport {
    pub fn quit_requested(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, GameEvent::QuitRequested))
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}
