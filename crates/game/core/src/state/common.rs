use crate::error::ActionError;

/// Currency balance.
pub type Roubles = u32;

/// Item weight in grams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Weight(u32);

impl Weight {
    pub const ZERO: Self = Self(0);

    pub const fn from_grams(grams: u32) -> Self {
        Self(grams)
    }

    pub const fn from_kg(kg: u32) -> Self {
        Self(kg * 1_000)
    }

    pub const fn grams(self) -> u32 {
        self.0
    }

    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl core::ops::Add for Weight {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl core::ops::AddAssign for Weight {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, w| acc + w)
    }
}

impl core::fmt::Display for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{} kg", self.0 / 1_000, (self.0 % 1_000) / 100)
    }
}

/// Current/maximum pair for health and stamina.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Removes up to `amount` and returns how much was actually removed.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }

    /// Adds up to `amount` without exceeding the maximum and returns the gain.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.maximum - self.current);
        self.current += gained;
        gained
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.maximum);
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    /// Whole percentage of the maximum, rounded down.
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        (u64::from(self.current) * 100 / u64::from(self.maximum)) as u32
    }
}

/// Distance band a weapon is built for.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeBand {
    #[strum(serialize = "very short")]
    VeryShort,
    #[strum(serialize = "short")]
    Short,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "long")]
    Long,
}

/// Engagement range of a location.
///
/// `Close` fights like `VeryShort` but additionally lets the player read an
/// enemy's condition.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationRange {
    #[strum(serialize = "close")]
    Close,
    #[strum(serialize = "very short")]
    VeryShort,
    #[strum(serialize = "short")]
    Short,
    #[strum(serialize = "medium")]
    Medium,
    #[strum(serialize = "long")]
    Long,
}

impl LocationRange {
    /// Band used for hit-chance modifiers.
    pub const fn band(self) -> RangeBand {
        match self {
            Self::Close | Self::VeryShort => RangeBand::VeryShort,
            Self::Short => RangeBand::Short,
            Self::Medium => RangeBand::Medium,
            Self::Long => RangeBand::Long,
        }
    }

    pub const fn reveals_condition(self) -> bool {
        matches!(self, Self::Close)
    }
}

/// Body zone an attack is aimed at or lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitZone {
    #[strum(serialize = "head")]
    Head,
    #[strum(serialize = "body")]
    Body,
}

/// Human-readable description shared by items, characters and containers.
pub trait Describe {
    fn get_info(&self) -> String;
}

/// Resolves a player-typed name against a list of candidate names.
///
/// An exact case-insensitive match wins. Otherwise the query must be a prefix
/// of exactly one distinct name; duplicates of the same name resolve to the
/// first occurrence.
pub fn resolve_name<'a>(
    names: impl IntoIterator<Item = &'a str>,
    query: &str,
) -> Result<usize, ActionError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ActionError::invalid("a name is required"));
    }
    let needle = query.to_lowercase();

    let mut prefixed: Vec<(usize, &str)> = Vec::new();
    for (index, name) in names.into_iter().enumerate() {
        let lowered = name.to_lowercase();
        if lowered == needle {
            return Ok(index);
        }
        if lowered.starts_with(&needle) {
            prefixed.push((index, name));
        }
    }

    let Some(&(first, first_name)) = prefixed.first() else {
        return Err(ActionError::no_target(query));
    };
    if prefixed.iter().all(|(_, name)| *name == first_name) {
        return Ok(first);
    }

    let mut candidates: Vec<String> = Vec::new();
    for (_, name) in prefixed {
        if !candidates.iter().any(|c| c == name) {
            candidates.push(name.to_owned());
        }
    }
    Err(ActionError::Ambiguous {
        query: query.to_owned(),
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_display_uses_kilograms() {
        assert_eq!(Weight::from_grams(1_500).to_string(), "1.5 kg");
        assert_eq!(Weight::from_kg(50).to_string(), "50.0 kg");
    }

    #[test]
    fn meter_clamps_both_ways() {
        let mut meter = ResourceMeter::full(100);
        assert_eq!(meter.deplete(130), 100);
        assert!(meter.is_empty());
        assert_eq!(meter.restore(40), 40);
        assert_eq!(meter.restore(100), 60);
        assert!(meter.is_full());
    }

    #[test]
    fn close_range_fights_at_very_short() {
        assert_eq!(LocationRange::Close.band(), RangeBand::VeryShort);
        assert!(LocationRange::Close.reveals_condition());
        assert!(!LocationRange::VeryShort.reveals_condition());
    }

    #[test]
    fn exact_match_beats_prefix() {
        let names = ["AKM", "AK-74N"];
        assert_eq!(resolve_name(names, "akm"), Ok(0));
        assert_eq!(resolve_name(names, "ak-"), Ok(1));
    }

    #[test]
    fn ambiguous_prefix_lists_distinct_names() {
        let names = ["AKM", "AK-74N", "AKM"];
        let err = resolve_name(names, "ak").unwrap_err();
        assert_eq!(
            err,
            ActionError::Ambiguous {
                query: "ak".into(),
                candidates: vec!["AKM".into(), "AK-74N".into()],
            }
        );
    }

    #[test]
    fn identical_names_resolve_to_first() {
        let names = ["Bandage", "Bolts", "Bandage"];
        assert_eq!(resolve_name(names, "ban"), Ok(0));
        assert_eq!(
            resolve_name(names, "grizzly"),
            Err(ActionError::no_target("grizzly"))
        );
    }
}
