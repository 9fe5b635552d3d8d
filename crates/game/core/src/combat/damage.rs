//! Damage calculation and application.

use crate::env::RandomSource;

/// Spread applied to the player's weapon damage.
pub const PLAYER_DAMAGE_SPREAD: i32 = 5;
/// Spread applied to an enemy's base damage.
pub const ENEMY_DAMAGE_SPREAD: i32 = 3;
/// Raw damage multiplier for headshots, applied before defense.
pub const HEADSHOT_MULTIPLIER: u32 = 2;

/// Rolls raw damage: `base + uniform(-spread, spread)`, floored at 0.
pub fn roll_raw(base: u32, spread: i32, rng: &mut dyn RandomSource) -> u32 {
    let variance = rng.range(-spread, spread);
    (i64::from(base) + i64::from(variance)).max(0) as u32
}

/// Doubles raw damage for a headshot.
pub fn headshot(raw: u32) -> u32 {
    raw.saturating_mul(HEADSHOT_MULTIPLIER)
}

/// Subtracts armor: `max(0, raw - defense)`.
pub fn mitigate(raw: u32, defense: u32) -> u32 {
    raw.saturating_sub(defense)
}

/// Enemies hit in an uncovered head take double the mitigated damage.
pub fn enemy_unprotected_head(effective: u32) -> u32 {
    effective.saturating_mul(2)
}

/// The player hit in an uncovered head takes half again, rounded down.
pub fn player_unprotected_head(effective: u32) -> u32 {
    effective.saturating_mul(3) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn raw_damage_never_goes_negative() {
        let mut rng = ScriptedRng::new().with_ranges([-5, 5]);
        assert_eq!(roll_raw(3, PLAYER_DAMAGE_SPREAD, &mut rng), 0);
        assert_eq!(roll_raw(3, PLAYER_DAMAGE_SPREAD, &mut rng), 8);
    }

    #[test]
    fn mitigation_floors_at_zero() {
        assert_eq!(mitigate(10, 15), 0);
        assert_eq!(mitigate(30, 10), 20);
    }

    #[test]
    fn head_multipliers_differ_by_side() {
        // 30 raw headshot against no defense: 60 before the zone multiplier
        let raw = headshot(30);
        assert_eq!(raw, 60);
        assert_eq!(enemy_unprotected_head(mitigate(raw, 0)), 120);
        assert_eq!(player_unprotected_head(mitigate(raw, 0)), 90);
        assert_eq!(player_unprotected_head(7), 10);
    }
}
