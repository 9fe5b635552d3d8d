//! Raid and hideout state machine.
//!
//! A [`Session`] starts in the hideout. `start_raid` checkpoints the profile
//! without gear and drops the player into a fresh copy of the map. The raid
//! ends by extraction (everything is committed), death or timeout (the
//! checkpoint is restored and carried gear is lost). Every command returns a
//! [`TurnReport`]; rejected commands leave the state untouched.

mod command;
mod events;
mod hideout;
mod profile;
mod raid;

pub use command::{Availability, Command, ShopOrder, StorageOrder};
pub use events::{
    ExitView, GameEvent, InventoryView, LocationView, Offer, RaidOutcome, SaveRequest, StatsView,
    TurnReport,
};
pub use profile::{ProfileError, ProfileRecord};

use crate::combat::CombatDecider;
use crate::config::GameConfig;
use crate::env::{GameEnv, OracleError, RandomSource};
use crate::error::ActionError;
use crate::state::{
    Combatant, EquipSlot, Item, ItemBag, Location, LocationId, Player, Weight, WorldGraph,
};

pub const PLAYER_NAME: &str = "PMC";

/// A raid in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaidState {
    /// This raid's copy of the map.
    pub world: WorldGraph,
    pub location: LocationId,
    /// Actions left before the player times out.
    pub remaining: u32,
}

impl RaidState {
    pub fn current(&self) -> &Location {
        &self.world[self.location]
    }

    pub fn current_mut(&mut self) -> &mut Location {
        &mut self.world[self.location]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Hideout,
    Raid(RaidState),
}

/// One player's game: hideout state plus the raid in progress, if any.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    pub player: Player,
    pub stash: ItemBag,
    raids_survived: u32,
    phase: Phase,
    /// Pre-raid profile restored on death or timeout.
    checkpoint: Option<ProfileRecord>,
}

impl Session {
    /// Fresh profile from the content's starting kit.
    pub fn new_game(config: GameConfig, env: &GameEnv<'_>) -> Result<Self, OracleError> {
        let kit = env.config().starting_kit();
        let items = env.items();

        let mut player = Player::new(PLAYER_NAME);
        player.roubles = kit.roubles;
        for name in &kit.equipped {
            let item = items.instantiate(name)?;
            if !item.is_equippable() {
                return Err(OracleError::UnwearableKitItem(name.clone()));
            }
            if let Ok(Some(_)) = player.equipment.equip(item) {
                return Err(OracleError::KitSlotTaken(name.clone()));
            }
        }
        for item in profile::instantiate_all(items, &kit.inventory)? {
            player.inventory.push(item);
        }

        let mut stash = ItemBag::new(GameConfig::STASH_CAPACITY);
        for item in profile::instantiate_all(items, &kit.stash)? {
            stash.push(item);
        }

        Ok(Self::in_hideout(config, player, stash, 0))
    }

    /// Rebuilds a hideout session from a stored profile.
    pub fn from_record(
        config: GameConfig,
        record: &ProfileRecord,
        env: &GameEnv<'_>,
    ) -> Result<Self, ProfileError> {
        let items = env.items();

        let mut player = Player::new(PLAYER_NAME);
        player.roubles = record.roubles;
        player.health.set(record.health.max(1));
        player.stamina.set(record.stamina);
        if record.bleeding {
            player.start_bleeding();
        }
        for (slot, name) in record.equipped() {
            let item = items.instantiate(name)?;
            if EquipSlot::for_item(&item) != Some(slot) {
                return Err(ProfileError::SlotMismatch {
                    item: name.to_owned(),
                    slot,
                });
            }
            let replaced = player.equipment.equip(item);
            debug_assert!(matches!(replaced, Ok(None)), "record fills each slot once");
        }
        for item in profile::instantiate_all(items, &record.inventory)? {
            player
                .ensure_can_carry(&item)
                .map_err(|_| ProfileError::over_capacity(&item, player.capacity()))?;
            player.inventory.push(item);
        }

        let mut stash = ItemBag::new(GameConfig::STASH_CAPACITY);
        for item in profile::instantiate_all(items, &record.stash)? {
            stash
                .ensure_fits(&item, Weight::ZERO)
                .map_err(|_| ProfileError::over_capacity(&item, stash.capacity()))?;
            stash.push(item);
        }

        Ok(Self::in_hideout(config, player, stash, record.raids_survived))
    }

    fn in_hideout(config: GameConfig, player: Player, stash: ItemBag, raids_survived: u32) -> Self {
        Self {
            config,
            player,
            stash,
            raids_survived,
            phase: Phase::Hideout,
            checkpoint: None,
        }
    }

    /// Full profile including carried and worn gear.
    pub fn to_record(&self) -> ProfileRecord {
        let names = |bag: &ItemBag| bag.names().map(str::to_owned).collect();
        let slot = |slot| self.player.equipment.get(slot).map(|item: &Item| item.name().to_owned());
        ProfileRecord {
            roubles: self.player.roubles,
            stash: names(&self.stash),
            health: self.player.health.current,
            stamina: self.player.stamina.current,
            bleeding: self.player.is_bleeding(),
            raids_survived: self.raids_survived,
            inventory: names(&self.player.inventory),
            equipped_weapon: slot(EquipSlot::Weapon),
            equipped_armor: slot(EquipSlot::BodyArmor),
            equipped_helmet: slot(EquipSlot::Helmet),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn raid(&self) -> Option<&RaidState> {
        match &self.phase {
            Phase::Raid(raid) => Some(raid),
            Phase::Hideout => None,
        }
    }

    pub fn in_raid(&self) -> bool {
        self.raid().is_some()
    }

    pub fn raids_survived(&self) -> u32 {
        self.raids_survived
    }

    /// Applies one command.
    ///
    /// Randomness is drawn only from `rng`; combat decisions come from
    /// `decider`. Nothing here panics or returns an error: refusals are
    /// reported in [`TurnReport::rejection`].
    pub fn perform(
        &mut self,
        command: Command,
        env: &GameEnv<'_>,
        rng: &mut dyn RandomSource,
        decider: &mut dyn CombatDecider,
    ) -> TurnReport {
        let mut report = TurnReport::default();
        if command == Command::Quit {
            report.events.push(GameEvent::QuitRequested);
            return report;
        }

        match std::mem::replace(&mut self.phase, Phase::Hideout) {
            Phase::Hideout => match self.hideout_action(command, env, rng, &mut report.events) {
                Ok(save) => report.save = save,
                Err(err) => report.rejection = Some(err),
            },
            Phase::Raid(raid) => self.raid_turn(raid, command, env, rng, decider, &mut report),
        }
        report
    }

    // ===== shared views =====

    fn show_inventory(&self) -> GameEvent {
        GameEvent::InventoryShown(InventoryView {
            equipped: self
                .player
                .equipment
                .iter()
                .map(|(slot, item)| (slot, item.name().to_owned()))
                .collect(),
            items: self
                .player
                .inventory
                .items()
                .iter()
                .map(crate::state::Describe::get_info)
                .collect(),
            carried: self.player.carried_weight(),
            capacity: self.player.capacity(),
            roubles: self.player.roubles,
        })
    }

    fn show_stats(&self, raid_actions_left: Option<u32>) -> GameEvent {
        let player = &self.player;
        let slot = |slot| player.equipment.get(slot).map(|item: &Item| item.name().to_owned());
        GameEvent::StatsShown(StatsView {
            name: player.name().to_owned(),
            health: player.health.current,
            max_health: player.health.maximum,
            health_status: player.health_status(),
            stamina: player.stamina.current,
            max_stamina: player.stamina.maximum,
            stamina_status: player.stamina_status(),
            bleeding: player.is_bleeding(),
            weapon: slot(EquipSlot::Weapon),
            body_armor: slot(EquipSlot::BodyArmor),
            helmet: slot(EquipSlot::Helmet),
            carried: player.carried_weight(),
            capacity: player.capacity(),
            roubles: player.roubles,
            raids_survived: self.raids_survived,
            raid_actions_left,
        })
    }

    /// Equip from the backpack by item name.
    fn equip(&mut self, query: &str, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let index = self.player.inventory.find(query)?;
        let item = self
            .player
            .inventory
            .get(index)
            .map(|item| item.name().to_owned())
            .unwrap_or_default();
        let (slot, replaced) = self.player.equip(index)?;
        events.push(GameEvent::Equipped {
            item,
            slot,
            replaced,
        });
        Ok(())
    }

    /// Unequip by slot keyword, falling back to the worn item's name.
    fn unequip(&mut self, query: &str, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let slot = match EquipSlot::parse(query) {
            Some(slot) => slot,
            None => self.player.equipment.find(query)?,
        };
        let item = self.player.unequip(slot)?;
        events.push(GameEvent::Unequipped { item, slot });
        Ok(())
    }

    /// Describes a carried or worn item; the stash is searched too when `with_stash`.
    fn examine(
        &self,
        query: &str,
        with_stash: bool,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        use crate::state::Describe;

        let info = match self.player.find_owned(query) {
            Ok(item) => item.get_info(),
            Err(ActionError::NoTarget { .. }) if with_stash => {
                let index = self.stash.find(query)?;
                self.stash
                    .get(index)
                    .map(Describe::get_info)
                    .unwrap_or_default()
            }
            Err(err) => return Err(err),
        };
        events.push(GameEvent::ItemInfo { info });
        Ok(())
    }
}
