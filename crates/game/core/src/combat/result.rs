//! Combat result types and structured events.

use crate::env::Chance;
use crate::state::{EnemyCondition, HitZone};

/// Outcome of a single attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackResult {
    /// Attack missed the target.
    Miss,
    /// Attack landed on `zone` and removed `damage` health after armor.
    Hit { zone: HitZone, damage: u32 },
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    pub fn damage(&self) -> u32 {
        match self {
            Self::Miss => 0,
            Self::Hit { damage, .. } => *damage,
        }
    }
}

/// Something that happened during a fight, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    /// The player attacked. `condition` is only revealed at close range.
    PlayerAttack {
        aimed: HitZone,
        chance: Chance,
        result: AttackResult,
        condition: Option<EnemyCondition>,
    },
    /// The enemy attacked; `bonus` marks the free attack after a failed flee.
    EnemyAttack {
        enemy: String,
        bonus: bool,
        result: AttackResult,
    },
    BleedingStarted,
    FleeAttempt {
        direction: String,
        chance: Chance,
        success: bool,
    },
    EnemyDefeated {
        enemy: String,
    },
    PlayerDied {
        killed_by: String,
    },
}

/// How a fight ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatOutcome {
    PlayerDied,
    EnemyDefeated,
    Fled { direction: String },
}

/// Result of one round: keep fighting or stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Continue,
    Finished(CombatOutcome),
}

/// Everything a completed fight produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatReport {
    pub outcome: CombatOutcome,
    pub events: Vec<CombatEvent>,
}
