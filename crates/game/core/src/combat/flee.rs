//! Escape chance from an ongoing fight.

use crate::env::Chance;
use crate::state::Weight;

pub const FLEE_BASE: Chance = Chance::percent(80);
/// Chance lost when carrying the full capacity.
pub const FLEE_LOAD_PENALTY_BP: u32 = 5_000;
pub const FLEE_FLOOR: Chance = Chance::percent(10);

/// `max(10%, 80% - carried / capacity * 50%)`.
pub fn flee_chance(carried: Weight, capacity: Weight) -> Chance {
    if capacity == Weight::ZERO {
        return FLEE_FLOOR;
    }
    let penalty = u64::from(carried.grams()) * u64::from(FLEE_LOAD_PENALTY_BP)
        / u64::from(capacity.grams());
    let chance = i64::from(FLEE_BASE.bp()) - penalty.min(i64::MAX as u64) as i64;
    Chance::from_bp(chance.max(i64::from(FLEE_FLOOR.bp())) as u32)
}
