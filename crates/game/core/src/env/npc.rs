use crate::state::EnemyTier;

/// Provides enemy names, equipment pools and loot tables per tier.
pub trait NpcOracle {
    fn gear_pool(&self, tier: EnemyTier) -> &GearPool;

    /// Items any enemy may carry regardless of tier.
    fn common_loot(&self) -> &[String];
}

/// Names and equipment an enemy tier draws from.
///
/// `None` entries in the armor pools mean the enemy spawns without that piece.
/// Pools of different tiers never share an item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearPool {
    pub names: Vec<String>,
    pub weapons: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body_armor: Vec<Option<String>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub helmets: Vec<Option<String>>,
}

impl GearPool {
    /// Every item name this pool can hand out.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.weapons
            .iter()
            .map(String::as_str)
            .chain(self.body_armor.iter().flatten().map(String::as_str))
            .chain(self.helmets.iter().flatten().map(String::as_str))
    }
}
