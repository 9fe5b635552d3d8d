//! Combat resolution system.
//!
//! Pure functions that resolve a fight between the player and one enemy.
//! All randomness is drawn from the caller's [`RandomSource`](crate::env::RandomSource).
//!
//! # Core Functions
//!
//! - `resolve_combat`: loop of rounds driven by a [`CombatDecider`]
//! - `resolve_round`: one player decision plus the enemy's answer
//! - `player_hit_chance` / `enemy_hit_chance`: range-modified accuracy
//! - `flee_chance`: escape odds from carried weight

pub mod damage;
pub mod engine;
pub mod flee;
pub mod hit;
pub mod result;

pub use engine::{
    BLEED_CHANCE, CombatChoice, CombatDecider, CombatView, FixedAim, resolve_combat,
    resolve_round,
};
pub use flee::flee_chance;
pub use hit::{enemy_hit_chance, player_hit_chance, range_modifier};
pub use result::{AttackResult, CombatEvent, CombatOutcome, CombatReport, RoundOutcome};
