//! Hideout actions: trading, stash management and raid start.

use super::{
    Availability, Command, GameEvent, LocationView, Offer, Phase, RaidState, SaveRequest,
    Session, ShopOrder, StorageOrder,
};
use crate::config::GameConfig;
use crate::encounter;
use crate::env::{GameEnv, RandomSource};
use crate::error::ActionError;
use crate::state::{Describe, LocationId, Weight, resolve_name};

impl Session {
    /// Runs one hideout command. Successful state changes ask for a commit.
    pub(super) fn hideout_action(
        &mut self,
        command: Command,
        env: &GameEnv<'_>,
        rng: &mut dyn RandomSource,
        events: &mut Vec<GameEvent>,
    ) -> Result<Option<SaveRequest>, ActionError> {
        if command.availability() == Availability::RaidOnly {
            return Err(ActionError::invalid(format!(
                "'{}' is only possible during a raid",
                command.verb()
            )));
        }

        match command {
            Command::Equip(query) => self.equip(&query, events)?,
            Command::Unequip(query) => self.unequip(&query, events)?,
            Command::Examine(query) => {
                self.examine(&query, true, events)?;
                return Ok(None);
            }
            Command::Inventory => {
                events.push(self.show_inventory());
                return Ok(None);
            }
            Command::Stats => {
                events.push(self.show_stats(None));
                return Ok(None);
            }
            Command::Help => {
                events.push(GameEvent::HelpRequested { in_raid: false });
                return Ok(None);
            }
            Command::Shop(ShopOrder::Browse) => {
                events.push(self.browse_shop(env));
                return Ok(None);
            }
            Command::Shop(ShopOrder::Buy(query)) => self.buy(&query, env, events)?,
            Command::Shop(ShopOrder::Sell(query)) => self.sell(&query, events)?,
            Command::Storage(StorageOrder::Browse) => {
                events.push(GameEvent::StashShown {
                    items: self.stash.items().iter().map(Describe::get_info).collect(),
                    weight: self.stash.weight(),
                    capacity: self.stash.capacity(),
                });
                return Ok(None);
            }
            Command::Storage(StorageOrder::Deposit(query)) => self.deposit(&query, events)?,
            Command::Storage(StorageOrder::Withdraw(query)) => self.withdraw(&query, events)?,
            Command::StartRaid => return self.start_raid(env, rng, events).map(Some),
            other => return Err(ActionError::invalid(format!("'{}' is not possible here", other.verb()))),
        }
        Ok(Some(SaveRequest::Commit(self.to_record())))
    }

    fn browse_shop(&self, env: &GameEnv<'_>) -> GameEvent {
        let offers = env
            .config()
            .trader_stock()
            .iter()
            .filter_map(|name| env.items().instantiate(name).ok())
            .map(|item| Offer {
                item: item.name().to_owned(),
                price: item.value(),
                info: item.get_info(),
            })
            .collect();
        GameEvent::ShopShown {
            offers,
            roubles: self.player.roubles,
        }
    }

    fn buy(
        &mut self,
        query: &str,
        env: &GameEnv<'_>,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        let stock = env.config().trader_stock();
        let index = resolve_name(stock.iter().map(String::as_str), query)?;
        let item = env
            .items()
            .instantiate(&stock[index])
            .map_err(|_| ActionError::no_target(query))?;

        let price = item.value();
        if self.player.roubles < price {
            return Err(ActionError::InsufficientFunds {
                price,
                balance: self.player.roubles,
            });
        }
        let name = item.name().to_owned();
        self.player.pick_up(item)?;
        self.player.roubles -= price;

        events.push(GameEvent::Purchased {
            item: name,
            price,
            balance: self.player.roubles,
        });
        Ok(())
    }

    fn sell(&mut self, query: &str, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let index = self.player.inventory.find(query)?;
        let Some(item) = self.player.inventory.take(index) else {
            return Err(ActionError::no_target(query));
        };
        let price = item.value() / GameConfig::SELL_DIVISOR;
        self.player.roubles = self.player.roubles.saturating_add(price);

        events.push(GameEvent::Sold {
            item: item.name().to_owned(),
            price,
            balance: self.player.roubles,
        });
        Ok(())
    }

    fn deposit(&mut self, query: &str, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let index = self.player.inventory.find(query)?;
        if let Some(item) = self.player.inventory.get(index) {
            self.stash.ensure_fits(item, Weight::ZERO)?;
        }
        let Some(item) = self.player.inventory.take(index) else {
            return Err(ActionError::no_target(query));
        };
        events.push(GameEvent::Deposited {
            item: item.name().to_owned(),
        });
        self.stash.push(item);
        Ok(())
    }

    fn withdraw(&mut self, query: &str, events: &mut Vec<GameEvent>) -> Result<(), ActionError> {
        let index = self.stash.find(query)?;
        if let Some(item) = self.stash.get(index) {
            self.player.ensure_can_carry(item)?;
        }
        let Some(item) = self.stash.take(index) else {
            return Err(ActionError::no_target(query));
        };
        events.push(GameEvent::Withdrawn {
            item: item.name().to_owned(),
        });
        self.player.inventory.push(item);
        Ok(())
    }

    /// Checkpoints the profile and drops the player into a fresh map.
    fn start_raid(
        &mut self,
        env: &GameEnv<'_>,
        rng: &mut dyn RandomSource,
        events: &mut Vec<GameEvent>,
    ) -> Result<SaveRequest, ActionError> {
        let blueprint = env.map().blueprint();
        if blueprint.is_empty() {
            return Err(ActionError::invalid("there is no map to raid"));
        }

        let checkpoint = self.to_record().without_gear();

        self.player.health.refill();
        self.player.stamina.refill();
        self.player.stop_bleeding();

        let mut world = blueprint.clone();
        let start = LocationId(rng.pick(world.len()) as u16);
        encounter::repopulate(&mut world, env, rng);
        world[start].visited = true;

        let raid = RaidState {
            world,
            location: start,
            remaining: self.config.raid_actions,
        };
        events.push(GameEvent::RaidStarted {
            location: raid.current().name.clone(),
            actions: raid.remaining,
        });
        events.push(GameEvent::LocationShown(LocationView::of(&raid)));

        self.phase = Phase::Raid(raid);
        self.checkpoint = Some(checkpoint.clone());
        Ok(SaveRequest::Checkpoint(checkpoint))
    }
}
