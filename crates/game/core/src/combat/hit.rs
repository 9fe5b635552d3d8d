//! Hit chance and accuracy calculations.

use crate::env::Chance;
use crate::state::RangeBand;

/// Player accuracy before range modifiers.
pub const PLAYER_BASE_HIT: Chance = Chance::percent(75);
pub const HIT_CHANCE_FLOOR: Chance = Chance::percent(10);
pub const HIT_CHANCE_CEILING: Chance = Chance::percent(95);
/// Accuracy lost when the player aims for the head.
pub const HEAD_AIM_PENALTY_BP: i32 = 3_000;
/// Share of landed head-aimed player hits that become headshots.
pub const PLAYER_HEADSHOT_CHANCE: Chance = Chance::percent(40);
/// Share of landed head-aimed enemy hits that become headshots.
pub const ENEMY_HEADSHOT_CHANCE: Chance = Chance::percent(30);

/// Hit modifier in basis points for a weapon used at a location's range.
///
/// ```text
/// location \ weapon | very_short | short | medium | long
/// very_short/close  |    +20     |  +10  |   -5   |  -15
/// short             |    -10     |  +15  |   +5   |  -10
/// medium            |    -15     |   -5  |  +10   |   +5
/// long              |    -30     |  -20  |  -10   |  +20
/// ```
pub const fn range_modifier(location: RangeBand, weapon: RangeBand) -> i32 {
    use RangeBand::*;
    match (location, weapon) {
        (VeryShort, VeryShort) => 2_000,
        (VeryShort, Short) => 1_000,
        (VeryShort, Medium) => -500,
        (VeryShort, Long) => -1_500,
        (Short, VeryShort) => -1_000,
        (Short, Short) => 1_500,
        (Short, Medium) => 500,
        (Short, Long) => -1_000,
        (Medium, VeryShort) => -1_500,
        (Medium, Short) => -500,
        (Medium, Medium) => 1_000,
        (Medium, Long) => 500,
        (Long, VeryShort) => -3_000,
        (Long, Short) => -2_000,
        (Long, Medium) => -1_000,
        (Long, Long) => 2_000,
    }
}

/// Enemy hit modifier in basis points for the location's range.
pub const fn enemy_range_modifier(location: RangeBand) -> i32 {
    match location {
        RangeBand::VeryShort => 1_000,
        RangeBand::Short => 500,
        RangeBand::Medium => 0,
        RangeBand::Long => -1_000,
    }
}

/// Player hit chance for a weapon band at a location band.
///
/// # Formula
///
/// ```text
/// hit_chance = 75% + range_modifier(location, weapon)
/// clamped to [10%, 95%]
/// ```
pub fn player_hit_chance(location: RangeBand, weapon: RangeBand) -> Chance {
    PLAYER_BASE_HIT
        .offset(range_modifier(location, weapon))
        .clamp_to(HIT_CHANCE_FLOOR, HIT_CHANCE_CEILING)
}

/// Chance to land a head-aimed shot: the clamped chance minus the aim penalty.
pub fn head_aim_chance(body_chance: Chance) -> Chance {
    body_chance.offset(-HEAD_AIM_PENALTY_BP)
}

/// Enemy hit chance; `location` is `None` for bonus attacks that ignore range.
pub fn enemy_hit_chance(base: Chance, location: Option<RangeBand>) -> Chance {
    base.offset(location.map_or(0, enemy_range_modifier))
        .clamp_to(HIT_CHANCE_FLOOR, HIT_CHANCE_CEILING)
}
