//! Configuration oracle exposing the hideout economy to the rules.

use crate::state::Roubles;

/// Provides the starting kit and trader stock.
pub trait ConfigOracle {
    /// Balance and gear handed out when a new profile is created.
    fn starting_kit(&self) -> &StartingKit;

    /// Item names the trader sells.
    fn trader_stock(&self) -> &[String];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingKit {
    pub roubles: Roubles,
    /// Weapons and armor worn from the start.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stash: Vec<String>,
}
