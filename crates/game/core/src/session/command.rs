//! Parsed player commands.

/// One player command, already parsed from text by the client.
///
/// String arguments are raw user queries; the session resolves them against
/// whatever is in scope (exits, ground items, backpack, stash, trader stock).
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    Move(String),
    Look,
    Get(String),
    Drop(String),
    Equip(String),
    /// Slot keyword (`weapon`, `armor`, `helmet`) or the name of a worn item.
    Unequip(String),
    Use(String),
    Attack(String),
    Search(String),
    Examine(String),
    Rest,
    Flee(String),
    Extract,
    Inventory,
    Stats,
    Help,
    Quit,
    Shop(ShopOrder),
    Storage(StorageOrder),
    StartRaid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShopOrder {
    Browse,
    Buy(String),
    Sell(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageOrder {
    Browse,
    Deposit(String),
    Withdraw(String),
}

/// Where a command may be issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Anywhere,
    RaidOnly,
    HideoutOnly,
}

impl Command {
    /// Verb as typed on the console.
    pub fn verb(&self) -> &'static str {
        self.into()
    }

    pub const fn availability(&self) -> Availability {
        match self {
            Self::Equip(_)
            | Self::Unequip(_)
            | Self::Examine(_)
            | Self::Inventory
            | Self::Stats
            | Self::Help
            | Self::Quit => Availability::Anywhere,
            Self::Shop(_) | Self::Storage(_) | Self::StartRaid => Availability::HideoutOnly,
            Self::Move(_)
            | Self::Look
            | Self::Get(_)
            | Self::Drop(_)
            | Self::Use(_)
            | Self::Attack(_)
            | Self::Search(_)
            | Self::Rest
            | Self::Flee(_)
            | Self::Extract => Availability::RaidOnly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_are_snake_case() {
        assert_eq!(Command::StartRaid.verb(), "start_raid");
        assert_eq!(Command::Move("north".into()).verb(), "move");
        assert_eq!(Command::Shop(ShopOrder::Browse).verb(), "shop");
    }

    #[test]
    fn availability_splits_hideout_and_raid() {
        assert_eq!(Command::Extract.availability(), Availability::RaidOnly);
        assert_eq!(Command::StartRaid.availability(), Availability::HideoutOnly);
        assert_eq!(Command::Equip("AKM".into()).availability(), Availability::Anywhere);
    }
}
