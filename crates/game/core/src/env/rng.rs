//! Random source for combat rolls and procedural spawning.
//!
//! Every random decision in the rules is drawn through [`RandomSource`] so a
//! seeded generator replays a raid exactly and tests can script each roll.
//!
//! # Determinism
//!
//! Implementations must be deterministic: given the same seed they must
//! produce the same sequence. [`PcgRng`] is the production generator and
//! [`ScriptedRng`] feeds predetermined values.

use std::collections::VecDeque;

/// Probability expressed in basis points (`0..=10_000`).
///
/// Rolls are uniform in `0..10_000` and succeed when `roll < chance`, so
/// [`Chance::ZERO`] never succeeds and [`Chance::CERTAIN`] always does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Chance(u32);

impl Chance {
    pub const SCALE: u32 = 10_000;
    pub const ZERO: Self = Self(0);
    pub const CERTAIN: Self = Self(Self::SCALE);

    /// Builds a chance from basis points, saturating at certainty.
    pub const fn from_bp(bp: u32) -> Self {
        if bp > Self::SCALE {
            Self(Self::SCALE)
        } else {
            Self(bp)
        }
    }

    pub const fn percent(percent: u32) -> Self {
        Self::from_bp(percent.saturating_mul(100))
    }

    pub const fn bp(self) -> u32 {
        self.0
    }

    /// Shifts the chance by `delta_bp`, saturating inside `[0, SCALE]`.
    pub fn offset(self, delta_bp: i32) -> Self {
        let shifted = i64::from(self.0) + i64::from(delta_bp);
        Self(shifted.clamp(0, i64::from(Self::SCALE)) as u32)
    }

    pub fn clamp_to(self, floor: Self, ceiling: Self) -> Self {
        Self(self.0.clamp(floor.0, ceiling.0))
    }

    /// Whole-percent value, rounded to nearest.
    pub const fn as_percent(self) -> u32 {
        (self.0 + 50) / 100
    }
}

impl core::fmt::Display for Chance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}

/// Stateful source of randomness.
///
/// Only [`RandomSource::next_u32`] is required; the provided helpers derive
/// every roll the rules need from it.
pub trait RandomSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform roll in `0..Chance::SCALE`.
    fn roll(&mut self) -> u32 {
        self.next_u32() % Chance::SCALE
    }

    /// Returns true with probability `chance`.
    fn check(&mut self, chance: Chance) -> bool {
        self.roll() < chance.bp()
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (u64::from(self.next_u32()) % span) as i64) as i32
    }

    /// Uniform index into a collection of `len` elements (0 when empty).
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.range(0, (len - 1).min(i32::MAX as usize) as i32) as usize
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Random source that replays queued values.
///
/// Rolls and ranges come from separate queues. When a queue runs dry the
/// fallback is used: rolls default to the highest value (every check fails)
/// and ranges to their minimum. Queued range values are clamped into the
/// requested bounds.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    rolls: VecDeque<u32>,
    ranges: VecDeque<i32>,
    fallback_roll: u32,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self {
            rolls: VecDeque::new(),
            ranges: VecDeque::new(),
            fallback_roll: Chance::SCALE - 1,
        }
    }

    /// Queue rolls in basis points.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = u32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue results for [`RandomSource::range`] and [`RandomSource::pick`].
    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = i32>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    pub fn with_fallback_roll(mut self, roll: u32) -> Self {
        self.fallback_roll = roll.min(Chance::SCALE - 1);
        self
    }

    pub fn push_roll(&mut self, roll: u32) {
        self.rolls.push_back(roll);
    }

    pub fn push_range(&mut self, value: i32) {
        self.ranges.push_back(value);
    }

    /// Whether every queued value has been consumed.
    pub fn is_drained(&self) -> bool {
        self.rolls.is_empty() && self.ranges.is_empty()
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.roll()
    }

    fn roll(&mut self) -> u32 {
        self.rolls
            .pop_front()
            .map_or(self.fallback_roll, |roll| roll.min(Chance::SCALE - 1))
    }

    fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.ranges
            .pop_front()
            .map_or(min, |value| value.clamp(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let mut c = PcgRng::new(43);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn range_stays_inside_bounds() {
        let mut rng = PcgRng::new(7);
        for _ in 0..1_000 {
            let value = rng.range(-5, 5);
            assert!((-5..=5).contains(&value));
            assert!(rng.roll() < Chance::SCALE);
        }
        assert_eq!(rng.range(3, 3), 3);
        assert_eq!(rng.pick(0), 0);
    }

    #[test]
    fn chance_boundaries() {
        let mut rng = ScriptedRng::new().with_rolls([0, 9_999, 7_499, 7_500]);
        assert!(!rng.check(Chance::ZERO));
        assert!(rng.check(Chance::CERTAIN));
        assert!(rng.check(Chance::percent(75)));
        assert!(!rng.check(Chance::percent(75)));
    }

    #[test]
    fn chance_offset_saturates() {
        assert_eq!(Chance::percent(20).offset(-3_000), Chance::ZERO);
        assert_eq!(Chance::percent(95).offset(1_000), Chance::CERTAIN);
        assert_eq!(Chance::from_bp(8_500).to_string(), "85%");
    }

    #[test]
    fn scripted_ranges_are_clamped_and_fall_back_to_min() {
        let mut rng = ScriptedRng::new().with_ranges([10, -10]);
        assert_eq!(rng.range(-5, 5), 5);
        assert_eq!(rng.range(-5, 5), -5);
        assert_eq!(rng.range(2, 5), 2);
        assert!(rng.is_drained());
    }
}
