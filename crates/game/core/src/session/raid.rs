//! Raid turns: movement, looting, fights and the end-of-turn countdown.

use super::{
    Availability, Command, ExitView, GameEvent, LocationView, Phase, RaidOutcome, RaidState,
    SaveRequest, Session, TurnReport,
};
use crate::combat::{CombatDecider, CombatOutcome, resolve_combat};
use crate::config::GameConfig;
use crate::encounter;
use crate::env::{GameEnv, RandomSource};
use crate::error::ActionError;
use crate::state::{Combatant, Describe, Item, LocationId};

impl LocationView {
    pub(super) fn of(raid: &RaidState) -> Self {
        let here = raid.current();
        Self {
            name: here.name.clone(),
            description: here.description.clone(),
            range: here.range,
            extraction: here.extraction,
            items: here.items.iter().map(Describe::get_info).collect(),
            containers: here.containers.iter().map(Describe::get_info).collect(),
            enemies: here
                .enemies
                .iter()
                .map(|enemy| enemy.name().to_owned())
                .collect(),
            exits: here
                .exits
                .iter()
                .map(|exit| ExitView {
                    direction: exit.direction.clone(),
                    destination: raid
                        .world
                        .get(exit.target)
                        .map_or_else(String::new, |target| target.name.clone()),
                })
                .collect(),
        }
    }
}

/// How a single fight inside a raid ended.
enum Fight {
    Won,
    Lost,
    Fled(String),
}

impl Session {
    /// Plays one raid turn and settles the raid if it ended.
    ///
    /// Order: the action, a death check, the countdown, then bleeding.
    pub(super) fn raid_turn(
        &mut self,
        mut raid: RaidState,
        command: Command,
        env: &GameEnv<'_>,
        rng: &mut dyn RandomSource,
        decider: &mut dyn CombatDecider,
        report: &mut TurnReport,
    ) {
        let ended = match self.raid_action(&mut raid, command, env, rng, decider, &mut report.events)
        {
            Ok(ended) => ended,
            Err(err) => {
                let consumes_turn = err.consumes_turn();
                report.rejection = Some(err);
                if !consumes_turn {
                    self.phase = Phase::Raid(raid);
                    return;
                }
                None
            }
        };

        let ended = match ended {
            Some(outcome) => Some(outcome),
            None => self.end_of_turn(&mut raid, rng, &mut report.events),
        };
        match ended {
            Some(outcome) => self.finish_raid(outcome, report),
            None => self.phase = Phase::Raid(raid),
        }
    }

    fn raid_action(
        &mut self,
        raid: &mut RaidState,
        command: Command,
        env: &GameEnv<'_>,
        rng: &mut dyn RandomSource,
        decider: &mut dyn CombatDecider,
        events: &mut Vec<GameEvent>,
    ) -> Result<Option<RaidOutcome>, ActionError> {
        if command.availability() == Availability::HideoutOnly {
            return Err(ActionError::invalid(format!(
                "'{}' is only possible in the hideout",
                command.verb()
            )));
        }

        match command {
            Command::Move(direction) => self.move_to(raid, &direction, env, rng, decider, events)?,
            Command::Look => events.push(GameEvent::LocationShown(LocationView::of(raid))),
            Command::Get(query) => {
                let here = raid.current_mut();
                let index = here.find_item(&query)?;
                self.player.ensure_can_carry(&here.items[index])?;
                let item = here.items.remove(index);
                events.push(GameEvent::ItemTaken {
                    item: item.name().to_owned(),
                });
                self.player.inventory.push(item);
            }
            Command::Drop(query) => {
                let index = self.player.inventory.find(&query)?;
                let Some(item) = self.player.inventory.take(index) else {
                    return Err(ActionError::no_target(query));
                };
                events.push(GameEvent::ItemDropped {
                    item: item.name().to_owned(),
                });
                raid.current_mut().items.push(item);
            }
            Command::Equip(query) => self.equip(&query, events)?,
            Command::Unequip(query) => self.unequip(&query, events)?,
            Command::Use(query) => {
                let index = self.player.inventory.find(&query)?;
                let used = self.player.use_consumable(index)?;
                events.push(GameEvent::ConsumableUsed(used));
            }
            Command::Attack(query) => {
                let index = raid.current().find_enemy(&query)?;
                if let Fight::Fled(direction) = self.fight(raid, index, rng, decider, events) {
                    escape(raid, &direction, env, rng, events);
                }
            }
            Command::Search(query) => self.search(raid, &query, events)?,
            Command::Examine(query) => self.examine(&query, false, events)?,
            Command::Rest => {
                if self.player.stamina.is_full() {
                    events.push(GameEvent::AlreadyRested);
                } else {
                    let restored = self
                        .player
                        .stamina
                        .restore(GameConfig::REST_STAMINA_RESTORE);
                    events.push(GameEvent::Rested {
                        restored,
                        stamina: self.player.stamina.current,
                    });
                }
            }
            Command::Flee(_) => return Err(ActionError::invalid("you can only flee during combat")),
            Command::Extract => {
                let here = raid.current();
                if !here.extraction {
                    return Err(ActionError::NotExtractionPoint);
                }
                if here.has_enemies() {
                    return Err(ActionError::ExtractionBlocked);
                }
                return Ok(Some(RaidOutcome::Extracted));
            }
            Command::Inventory => events.push(self.show_inventory()),
            Command::Stats => events.push(self.show_stats(Some(raid.remaining))),
            Command::Help => events.push(GameEvent::HelpRequested { in_raid: true }),
            other => {
                return Err(ActionError::invalid(format!(
                    "'{}' is not possible here",
                    other.verb()
                )));
            }
        }

        if !self.player.is_alive() {
            return Ok(Some(RaidOutcome::Died));
        }
        Ok(None)
    }

    fn move_to(
        &mut self,
        raid: &mut RaidState,
        query: &str,
        env: &GameEnv<'_>,
        rng: &mut dyn RandomSource,
        decider: &mut dyn CombatDecider,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        let exit = raid.current().exit(query)?;
        let direction = exit.direction.clone();
        let Some(destination) = raid.world.get(exit.target) else {
            return Err(ActionError::no_target(query));
        };
        let (target, destination) = (destination.id, destination.name.clone());

        self.player
            .spend_stamina(GameConfig::MOVE_STAMINA_COST)?;
        events.push(GameEvent::Moved {
            direction,
            destination,
        });
        self.player.stamina.restore(GameConfig::MOVE_STAMINA_REGEN);
        arrive(raid, target, env, rng, events);
        self.ambush(raid, env, rng, decider, events);
        Ok(())
    }

    /// Fights every enemy at the current location in order.
    fn ambush(
        &mut self,
        raid: &mut RaidState,
        env: &GameEnv<'_>,
        rng: &mut dyn RandomSource,
        decider: &mut dyn CombatDecider,
        events: &mut Vec<GameEvent>,
    ) {
        if !raid.current().has_enemies() {
            return;
        }
        events.push(GameEvent::Ambush {
            enemies: raid
                .current()
                .enemies
                .iter()
                .map(|enemy| enemy.name().to_owned())
                .collect(),
        });

        while raid.current().has_enemies() {
            match self.fight(raid, 0, rng, decider, events) {
                Fight::Won => {}
                Fight::Lost => return,
                Fight::Fled(direction) => {
                    escape(raid, &direction, env, rng, events);
                    return;
                }
            }
        }
        events.push(GameEvent::AreaCleared);
    }

    /// Fights the enemy at `index` of the current location.
    ///
    /// A defeated enemy leaves the location and its gear and loot fall to the
    /// ground; otherwise it stays where it was.
    fn fight(
        &mut self,
        raid: &mut RaidState,
        index: usize,
        rng: &mut dyn RandomSource,
        decider: &mut dyn CombatDecider,
        events: &mut Vec<GameEvent>,
    ) -> Fight {
        let here = raid.location;
        let mut enemy = raid.world[here].enemies.remove(index);
        events.push(GameEvent::CombatStarted {
            enemy: enemy.name().to_owned(),
        });

        let report = resolve_combat(&mut self.player, &mut enemy, &raid.world[here], decider, rng);
        events.extend(report.events.into_iter().map(GameEvent::Combat));

        match report.outcome {
            CombatOutcome::EnemyDefeated => {
                let name = enemy.name().to_owned();
                let drops = enemy.into_drops();
                events.push(GameEvent::EnemyLooted {
                    enemy: name,
                    items: drops.iter().map(|item| item.name().to_owned()).collect(),
                });
                raid.world[here].items.extend(drops);
                Fight::Won
            }
            CombatOutcome::PlayerDied => {
                raid.world[here].enemies.insert(index, enemy);
                Fight::Lost
            }
            CombatOutcome::Fled { direction } => {
                raid.world[here].enemies.insert(index, enemy);
                Fight::Fled(direction)
            }
        }
    }

    /// Moves every item that fits from a container into the backpack.
    fn search(
        &mut self,
        raid: &mut RaidState,
        query: &str,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        let here = raid.current_mut();
        let index = here.find_container(query)?;
        let container = &mut here.containers[index];
        if container.looted || container.items.is_empty() {
            container.looted = true;
            events.push(GameEvent::ContainerEmpty {
                container: container.name.clone(),
            });
            return Ok(());
        }

        let mut found = Vec::new();
        let mut left_behind: Vec<Item> = Vec::new();
        for item in std::mem::take(&mut container.items) {
            if self.player.ensure_can_carry(&item).is_ok() {
                found.push(item.name().to_owned());
                self.player.inventory.push(item);
            } else {
                left_behind.push(item);
            }
        }
        container.looted = left_behind.is_empty();
        events.push(GameEvent::ContainerSearched {
            container: container.name.clone(),
            found,
            left_behind: left_behind.iter().map(|item| item.name().to_owned()).collect(),
        });
        container.items = left_behind;
        Ok(())
    }

    /// Death check, countdown, then a bleeding tick.
    fn end_of_turn(
        &mut self,
        raid: &mut RaidState,
        rng: &mut dyn RandomSource,
        events: &mut Vec<GameEvent>,
    ) -> Option<RaidOutcome> {
        if !self.player.is_alive() {
            return Some(RaidOutcome::Died);
        }

        raid.remaining = raid.remaining.saturating_sub(1);
        events.push(GameEvent::CountdownTick {
            remaining: raid.remaining,
        });
        if raid.remaining == 0 {
            return Some(RaidOutcome::TimedOut);
        }

        if self.player.is_bleeding() {
            let amount = rng
                .range(
                    GameConfig::BLEED_DAMAGE_MIN as i32,
                    GameConfig::BLEED_DAMAGE_MAX as i32,
                )
                .max(0) as u32;
            let tick = self.player.bleed(amount);
            events.push(GameEvent::Bled {
                damage: tick.effective,
                health: self.player.health.current,
            });
            if tick.killed {
                return Some(RaidOutcome::Died);
            }
        }
        None
    }

    /// Returns to the hideout, keeping or losing the carried gear.
    fn finish_raid(&mut self, outcome: RaidOutcome, report: &mut TurnReport) {
        let checkpoint = self.checkpoint.take();
        let mut lost = Vec::new();

        if outcome.keeps_gear() {
            self.player.health.refill();
            self.player.stop_bleeding();
            self.raids_survived += 1;
        } else {
            lost = self
                .player
                .strip_gear()
                .iter()
                .map(|item| item.name().to_owned())
                .collect();
            let (health, stamina) = match checkpoint {
                Some(record) => {
                    self.player.roubles = record.roubles;
                    (record.health, record.stamina)
                }
                None => (self.player.health.maximum, self.player.stamina.maximum),
            };
            self.player.revive(health, stamina);
        }
        report.save = Some(SaveRequest::Commit(self.to_record()));

        report.events.push(GameEvent::RaidEnded { outcome, lost });
        report.outcome = Some(outcome);
        self.phase = Phase::Hideout;
    }
}

/// Enters `target`: spawns enemies across the map and shows the new location.
fn arrive(
    raid: &mut RaidState,
    target: LocationId,
    env: &GameEnv<'_>,
    rng: &mut dyn RandomSource,
    events: &mut Vec<GameEvent>,
) {
    raid.location = target;
    let spawns = encounter::repopulate(&mut raid.world, env, rng);
    if let Some(spawn) = spawns.into_iter().find(|spawn| spawn.location == target) {
        events.push(GameEvent::EnemiesSpotted {
            enemies: spawn.enemies,
        });
    }
    raid.current_mut().visited = true;
    events.push(GameEvent::LocationShown(LocationView::of(raid)));
}

/// Leaves through the exit a successful flee chose. No ambush follows.
fn escape(
    raid: &mut RaidState,
    direction: &str,
    env: &GameEnv<'_>,
    rng: &mut dyn RandomSource,
    events: &mut Vec<GameEvent>,
) {
    let Some(target) = raid.world.neighbor(raid.location, direction) else {
        return;
    };
    events.push(GameEvent::Moved {
        direction: direction.to_owned(),
        destination: raid.world[target].name.clone(),
    });
    arrive(raid, target, env, rng, events);
}
