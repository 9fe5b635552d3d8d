//! Capabilities shared by the player and enemies.

use super::{Describe, HitZone, ResourceMeter};

/// Result of applying damage to a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// Health actually removed after armor and zone multipliers.
    pub effective: u32,
    /// True only on the hit that brought health to zero.
    pub killed: bool,
}

/// Anything that can be hit in combat.
///
/// Each variant applies armor and the unprotected-head multiplier its own way.
pub trait Combatant: Describe {
    fn name(&self) -> &str;

    fn health(&self) -> &ResourceMeter;

    fn is_alive(&self) -> bool {
        !self.health().is_empty()
    }

    /// Applies `amount` of incoming damage to `zone`.
    ///
    /// `amount` already includes the headshot doubling. The report's
    /// `killed` flag is set exactly once, on the transition to zero health.
    fn take_damage(&mut self, amount: u32, zone: HitZone) -> DamageReport;
}

/// Player health tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum HealthStatus {
    #[strum(serialize = "Healthy")]
    Healthy,
    #[strum(serialize = "Lightly Wounded")]
    LightlyWounded,
    #[strum(serialize = "Near Death")]
    NearDeath,
    #[strum(serialize = "Deceased")]
    Deceased,
}

impl HealthStatus {
    pub fn from_meter(meter: &ResourceMeter) -> Self {
        match meter.percent() {
            _ if meter.is_empty() => Self::Deceased,
            75.. => Self::Healthy,
            40.. => Self::LightlyWounded,
            _ => Self::NearDeath,
        }
    }
}

/// Player stamina tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum StaminaStatus {
    #[strum(serialize = "Normal")]
    Normal,
    #[strum(serialize = "Winded")]
    Winded,
    #[strum(serialize = "Gassed")]
    Gassed,
    #[strum(serialize = "Exhausted")]
    Exhausted,
}

impl StaminaStatus {
    pub fn from_meter(meter: &ResourceMeter) -> Self {
        match meter.percent() {
            _ if meter.is_empty() => Self::Exhausted,
            80.. => Self::Normal,
            40.. => Self::Winded,
            _ => Self::Gassed,
        }
    }
}

/// Enemy health as the player perceives it at close range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum EnemyCondition {
    #[strum(serialize = "Healthy")]
    Healthy,
    #[strum(serialize = "Wounded")]
    Wounded,
    #[strum(serialize = "Critical")]
    Critical,
    #[strum(serialize = "Dead")]
    Dead,
}

impl EnemyCondition {
    pub fn from_meter(meter: &ResourceMeter) -> Self {
        match meter.percent() {
            _ if meter.is_empty() => Self::Dead,
            75.. => Self::Healthy,
            40.. => Self::Wounded,
            _ => Self::Critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_tiers_follow_thresholds() {
        let tier = |hp| HealthStatus::from_meter(&ResourceMeter::new(hp, 100));
        assert_eq!(tier(100), HealthStatus::Healthy);
        assert_eq!(tier(75), HealthStatus::Healthy);
        assert_eq!(tier(74), HealthStatus::LightlyWounded);
        assert_eq!(tier(40), HealthStatus::LightlyWounded);
        assert_eq!(tier(1), HealthStatus::NearDeath);
        assert_eq!(tier(0), HealthStatus::Deceased);
    }

    #[test]
    fn stamina_and_condition_tiers() {
        assert_eq!(
            StaminaStatus::from_meter(&ResourceMeter::new(79, 100)),
            StaminaStatus::Winded
        );
        assert_eq!(
            StaminaStatus::from_meter(&ResourceMeter::new(0, 100)),
            StaminaStatus::Exhausted
        );
        assert_eq!(
            EnemyCondition::from_meter(&ResourceMeter::new(30, 200)),
            EnemyCondition::Critical
        );
        assert_eq!(
            EnemyCondition::from_meter(&ResourceMeter::new(1, 200)),
            EnemyCondition::Critical
        );
    }
}
