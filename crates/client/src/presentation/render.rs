//! Formats game events as console lines.

use game_core::{
    ActionError, AttackResult, CombatEvent, CombatView, Combatant, ConsumableEffect, GameEvent,
    HealthStatus, InventoryView, LocationView, Player, RaidOutcome, Session, StatsView,
    TurnReport,
};
use runtime::Startup;

use super::theme::{Theme, Tone};

/// Countdown values at which the remaining raid time is announced.
const COUNTDOWN_WARNINGS: &[u32] = &[50, 25, 10, 5, 3, 2, 1];

/// Turns events into text lines; the caller decides where they go.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Renders a whole report.
    ///
    /// `shown` holds, per fight, how many combat events were already printed
    /// while the fight was in progress; those are skipped here.
    pub fn report(&self, report: &TurnReport, shown: &[usize]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut fights = shown.iter().copied();
        let mut skip = 0;

        for event in &report.events {
            match event {
                GameEvent::CombatStarted { .. } => skip = fights.next().unwrap_or_default(),
                GameEvent::Combat(_) if skip > 0 => {
                    skip -= 1;
                    continue;
                }
                _ => {}
            }
            lines.extend(self.event(event));
        }
        if let Some(err) = &report.rejection {
            lines.push(self.rejection(err));
        }
        lines
    }

    pub fn event(&self, event: &GameEvent) -> Vec<String> {
        let t = &self.theme;
        match event {
            GameEvent::RaidStarted { location, actions } => vec![
                t.paint(Tone::Heading, "=== Raid started ==="),
                format!(
                    "You are deployed at {}. Reach an extraction point within {} actions.",
                    t.paint(Tone::Location, location),
                    actions
                ),
            ],
            GameEvent::LocationShown(view) => self.location(view),
            GameEvent::Moved {
                direction,
                destination,
            } => vec![format!(
                "You move {direction} to {}.",
                t.paint(Tone::Location, destination)
            )],
            GameEvent::EnemiesSpotted { enemies } => vec![t.paint(
                Tone::Bad,
                format!("Enemies spotted: {}!", enemies.join(", ")),
            )],
            GameEvent::Ambush { enemies } => vec![t.paint(
                Tone::Enemy,
                format!("Ambush! {} open fire!", enemies.join(", ")),
            )],
            GameEvent::CombatStarted { enemy } => {
                vec![t.paint(Tone::Heading, format!("--- Combat with {enemy} ---"))]
            }
            GameEvent::Combat(event) => vec![self.combat_event(event)],
            GameEvent::EnemyLooted { enemy, items } if items.is_empty() => {
                vec![format!("{enemy} carried nothing of value.")]
            }
            GameEvent::EnemyLooted { enemy, items } => vec![format!(
                "{enemy} dropped: {}",
                t.paint(Tone::Item, items.join(", "))
            )],
            GameEvent::AreaCleared => vec![t.paint(Tone::Good, "The area is clear.")],
            GameEvent::ItemTaken { item } => {
                vec![format!("You pick up {}.", t.paint(Tone::Item, item))]
            }
            GameEvent::ItemDropped { item } => {
                vec![format!("You drop {}.", t.paint(Tone::Item, item))]
            }
            GameEvent::Equipped {
                item,
                slot,
                replaced,
            } => {
                let mut line = format!("You equip {} as your {slot}.", t.paint(Tone::Item, item));
                if let Some(old) = replaced {
                    line.push_str(&format!(" {old} goes into your backpack."));
                }
                vec![line]
            }
            GameEvent::Unequipped { item, slot } => vec![format!(
                "You take off {} ({slot}) and stow it.",
                t.paint(Tone::Item, item)
            )],
            GameEvent::ConsumableUsed(used) if !used.consumed => vec![format!(
                "{} would do nothing right now; you keep it.",
                t.paint(Tone::Item, &used.item)
            )],
            GameEvent::ConsumableUsed(used) => {
                let item = t.paint(Tone::Item, &used.item);
                let line = match used.effect {
                    ConsumableEffect::Heal => {
                        format!("You use {item} and recover {} health.", used.amount)
                    }
                    ConsumableEffect::StaminaRestore => {
                        format!("You use {item} and recover {} stamina.", used.amount)
                    }
                    ConsumableEffect::CureBleeding => {
                        format!("You apply {item}. The bleeding stops.")
                    }
                };
                vec![t.paint(Tone::Good, line)]
            }
            GameEvent::ContainerSearched {
                container,
                found,
                left_behind,
            } => {
                let mut lines = vec![format!("You search {container}.")];
                if found.is_empty() {
                    lines.push("You find nothing you can carry.".to_owned());
                } else {
                    lines.push(format!("Found: {}", t.paint(Tone::Item, found.join(", "))));
                }
                if !left_behind.is_empty() {
                    lines.push(t.paint(
                        Tone::Warning,
                        format!("Too heavy to take: {}", left_behind.join(", ")),
                    ));
                }
                lines
            }
            GameEvent::ContainerEmpty { container } => vec![format!("{container} is empty.")],
            GameEvent::Rested { restored, stamina } => vec![format!(
                "You catch your breath: +{restored} stamina (now {stamina})."
            )],
            GameEvent::AlreadyRested => vec!["You are already fully rested.".to_owned()],
            GameEvent::ItemInfo { info } => vec![info.clone()],
            GameEvent::InventoryShown(view) => self.inventory(view),
            GameEvent::StatsShown(stats) => self.stats(stats),
            GameEvent::HelpRequested { in_raid } => self.help(*in_raid),
            GameEvent::Bled { damage, health } => vec![t.paint(
                Tone::Bad,
                format!("You are bleeding: -{damage} health ({health} left)."),
            )],
            GameEvent::CountdownTick { remaining } if COUNTDOWN_WARNINGS.contains(remaining) => {
                vec![t.paint(
                    Tone::Warning,
                    format!("{remaining} actions left before the extraction window closes."),
                )]
            }
            GameEvent::CountdownTick { .. } => Vec::new(),
            GameEvent::RaidEnded { outcome, lost } => self.raid_end(*outcome, lost),
            GameEvent::ShopShown { offers, roubles } => {
                let mut lines = vec![t.paint(Tone::Heading, "--- Trader ---")];
                lines.extend(offers.iter().map(|offer| {
                    format!("  {:>7} ₽  {}", offer.price, offer.info)
                }));
                lines.push(format!("You have {roubles} ₽."));
                lines
            }
            GameEvent::Purchased {
                item,
                price,
                balance,
            } => vec![format!(
                "You buy {} for {price} ₽ ({balance} ₽ left).",
                t.paint(Tone::Item, item)
            )],
            GameEvent::Sold {
                item,
                price,
                balance,
            } => vec![format!(
                "You sell {} for {price} ₽ (balance {balance} ₽).",
                t.paint(Tone::Item, item)
            )],
            GameEvent::StashShown {
                items,
                weight,
                capacity,
            } => {
                let mut lines = vec![t.paint(
                    Tone::Heading,
                    format!("--- Stash ({weight} / {capacity}) ---"),
                )];
                lines.extend(listing(items));
                lines
            }
            GameEvent::Deposited { item } => vec![format!(
                "You put {} in your stash.",
                t.paint(Tone::Item, item)
            )],
            GameEvent::Withdrawn { item } => vec![format!(
                "You take {} from your stash.",
                t.paint(Tone::Item, item)
            )],
            GameEvent::QuitRequested => vec!["See you next time, PMC.".to_owned()],
        }
    }

    pub fn combat_event(&self, event: &CombatEvent) -> String {
        let t = &self.theme;
        match event {
            CombatEvent::PlayerAttack {
                aimed,
                chance,
                result: AttackResult::Hit { zone, damage },
                condition,
            } => {
                let mut line = format!(
                    "You aim at the {aimed} ({chance}) and hit the {zone} for {damage} damage."
                );
                if let Some(condition) = condition {
                    line.push_str(&format!(" The enemy looks {condition}."));
                }
                t.paint(Tone::Good, line)
            }
            CombatEvent::PlayerAttack { aimed, chance, .. } => {
                format!("You aim at the {aimed} ({chance}) and miss.")
            }
            CombatEvent::EnemyAttack {
                enemy,
                bonus,
                result,
            } => {
                let opener = if *bonus { "As you turn to run, " } else { "" };
                match result {
                    AttackResult::Hit { zone, damage } => t.paint(
                        Tone::Bad,
                        format!("{opener}{enemy} hits your {zone} for {damage} damage."),
                    ),
                    AttackResult::Miss => format!("{opener}{enemy} misses."),
                }
            }
            CombatEvent::BleedingStarted => t.paint(Tone::Bad, "You are bleeding!"),
            CombatEvent::FleeAttempt { direction, .. } if direction.is_empty() => {
                t.paint(Tone::Bad, "There is nowhere to run!")
            }
            CombatEvent::FleeAttempt {
                direction,
                chance,
                success: true,
            } => t.paint(Tone::Good, format!("You escape {direction} ({chance})!")),
            CombatEvent::FleeAttempt {
                direction, chance, ..
            } => t.paint(
                Tone::Bad,
                format!("You fail to break away {direction} ({chance})."),
            ),
            CombatEvent::EnemyDefeated { enemy } => {
                t.paint(Tone::Good, format!("{enemy} has been neutralized!"))
            }
            CombatEvent::PlayerDied { killed_by } => {
                t.paint(Tone::Enemy, format!("You were killed by {killed_by}."))
            }
        }
    }

    pub fn rejection(&self, err: &ActionError) -> String {
        let text = match err {
            ActionError::InvalidCommand { reason } => reason.clone(),
            other => other.to_string(),
        };
        self.theme.paint(Tone::Warning, capitalize(&text))
    }

    /// One-line summary shown before every combat choice.
    pub fn combat_status(&self, view: &CombatView<'_>) -> String {
        let enemy = view.enemy;
        let mut line = format!(
            "{} ({})",
            self.theme.paint(Tone::Enemy, enemy.name()),
            enemy.tier()
        );
        if view.location.range.reveals_condition() {
            line.push_str(&format!(" looks {}", enemy.condition()));
        }
        let player = view.player;
        line.push_str(&format!(
            " | You: {} {}/{}, stamina {}/{}",
            self.health_status(player),
            player.health.current,
            player.health.maximum,
            player.stamina.current,
            player.stamina.maximum,
        ));
        if player.is_bleeding() {
            line.push_str(&self.theme.paint(Tone::Bad, ", bleeding"));
        }
        line
    }

    pub fn health_status(&self, player: &Player) -> String {
        self.theme.health(HealthStatus::from_meter(&player.health))
    }

    pub fn startup(&self, startup: &Startup, session: &Session) -> Vec<String> {
        let t = &self.theme;
        let roubles = session.player.roubles;
        let mut lines = vec![t.paint(Tone::Heading, "=== TEXTRACT ===")];
        match startup {
            Startup::NewGame => lines.push(format!(
                "Welcome, PMC. You start with {roubles} ₽ and a basic kit."
            )),
            Startup::Loaded => lines.push(format!(
                "Welcome back, PMC. {roubles} ₽ in hand, {} raids survived.",
                session.raids_survived()
            )),
            Startup::Recovered { reason } => {
                lines.push(t.paint(
                    Tone::Warning,
                    format!("Your save could not be used ({reason})."),
                ));
                lines.push(format!("Starting over with {roubles} ₽ and a basic kit."));
            }
        }
        lines.push(t.paint(Tone::Muted, "Type 'help' for a list of commands."));
        lines
    }

    pub fn prompt(&self, session: &Session) -> String {
        match session.raid() {
            Some(raid) => format!(
                "[{} | {} left] > ",
                self.theme.paint(Tone::Location, &raid.current().name),
                raid.remaining
            ),
            None => format!(
                "[{} | {} ₽] > ",
                self.theme.paint(Tone::Location, "Hideout"),
                session.player.roubles
            ),
        }
    }

    fn location(&self, view: &LocationView) -> Vec<String> {
        let t = &self.theme;
        let mut title = format!("--- {} ---", view.name);
        if view.extraction {
            title.push_str(" [EXTRACTION POINT]");
        }
        let mut lines = vec![
            t.paint(Tone::Location, title),
            view.description.clone(),
            t.paint(Tone::Muted, format!("Range: {}", view.range)),
        ];
        if !view.items.is_empty() {
            lines.push("On the ground:".to_owned());
            lines.extend(view.items.iter().map(|info| format!("  - {info}")));
        }
        if !view.containers.is_empty() {
            lines.push(format!("Containers: {}", view.containers.join(", ")));
        }
        if !view.enemies.is_empty() {
            lines.push(t.paint(
                Tone::Bad,
                format!("Enemies: {}", view.enemies.join(", ")),
            ));
        }
        if view.exits.is_empty() {
            lines.push("There is no way out of here.".to_owned());
        } else {
            lines.push("Exits:".to_owned());
            lines.extend(view.exits.iter().map(|exit| {
                format!(
                    "  - {} to {}",
                    capitalize(&exit.direction),
                    exit.destination
                )
            }));
        }
        lines
    }

    fn inventory(&self, view: &InventoryView) -> Vec<String> {
        let t = &self.theme;
        let mut lines = vec![t.paint(Tone::Heading, "--- Inventory ---")];
        if view.equipped.is_empty() {
            lines.push("Equipped: nothing".to_owned());
        } else {
            lines.push("Equipped:".to_owned());
            lines.extend(
                view.equipped
                    .iter()
                    .map(|(slot, name)| format!("  {slot}: {}", t.paint(Tone::Item, name))),
            );
        }
        lines.push(format!("Backpack ({} / {}):", view.carried, view.capacity));
        lines.extend(listing(&view.items));
        lines.push(format!("Roubles: {} ₽", view.roubles));
        lines
    }

    fn stats(&self, stats: &StatsView) -> Vec<String> {
        let t = &self.theme;
        let none = || "none".to_owned();
        let mut lines = vec![
            t.paint(Tone::Heading, format!("--- {} ---", stats.name)),
            format!(
                "Health: {}/{} ({})",
                stats.health,
                stats.max_health,
                t.health(stats.health_status)
            ),
            format!(
                "Stamina: {}/{} ({})",
                stats.stamina,
                stats.max_stamina,
                t.stamina(stats.stamina_status)
            ),
        ];
        if stats.bleeding {
            lines.push(t.paint(Tone::Bad, "You are bleeding."));
        }
        lines.push(format!("Weapon: {}", stats.weapon.clone().unwrap_or_else(none)));
        lines.push(format!("Armor: {}", stats.body_armor.clone().unwrap_or_else(none)));
        lines.push(format!("Helmet: {}", stats.helmet.clone().unwrap_or_else(none)));
        lines.push(format!("Carrying: {} / {}", stats.carried, stats.capacity));
        lines.push(format!("Roubles: {} ₽", stats.roubles));
        lines.push(format!("Raids survived: {}", stats.raids_survived));
        if let Some(left) = stats.raid_actions_left {
            lines.push(format!("Actions left this raid: {left}"));
        }
        lines
    }

    fn raid_end(&self, outcome: RaidOutcome, lost: &[String]) -> Vec<String> {
        let t = &self.theme;
        let mut lines = vec![match outcome {
            RaidOutcome::Extracted => t.paint(
                Tone::Good,
                "You extracted! Everything you carry is now safe in the hideout.",
            ),
            RaidOutcome::Died => t.paint(
                Tone::Bad,
                "You died. Everything you brought into the raid is lost.",
            ),
            RaidOutcome::TimedOut => t.paint(
                Tone::Bad,
                "Time is up. You are Missing in Action and the raid has failed.",
            ),
        }];
        if !lost.is_empty() {
            lines.push(t.paint(Tone::Muted, format!("Lost: {}", lost.join(", "))));
        }
        lines.push("You are back in the hideout.".to_owned());
        lines
    }

    fn help(&self, in_raid: bool) -> Vec<String> {
        let mut lines = vec![self.theme.paint(Tone::Heading, "--- Available commands ---")];
        let entries: &[&str] = if in_raid {
            &[
                "move [direction] (or n/e/s/w/ne/nw/se/sw) - Move to an adjacent location.",
                "look (or l) - Look around the current location again.",
                "get [item] - Pick up an item from the ground.",
                "drop [item] - Drop an item from your backpack.",
                "equip [item] - Equip a weapon, body armor or helmet.",
                "unequip [slot or item] - Take off worn gear.",
                "use [item] - Use a consumable.",
                "attack [enemy] - Attack an enemy here.",
                "search [container] - Search a container here.",
                "examine [item] (or ex) - Inspect an item you carry.",
                "rest - Recover some stamina.",
                "extract - Leave the raid from an extraction point.",
                "inventory (or inv) - Show your backpack and gear.",
                "stats (or stat) - Show your condition.",
                "help (or h) - Show this list.",
                "quit (or q) - Exit the game. Carried gear is lost.",
                "In combat: head, body or flee [direction].",
            ]
        } else {
            &[
                "shop - Browse the trader's stock.",
                "shop buy [item] / shop sell [item] - Trade with the trader.",
                "storage (or stash) - Show your stash.",
                "storage deposit [item] / storage withdraw [item] - Move items to and from the stash.",
                "equip [item] / unequip [slot or item] - Manage your loadout.",
                "examine [item] (or ex) - Inspect an item you own.",
                "inventory (or inv) - Show your backpack and gear.",
                "stats (or stat) - Show your condition.",
                "start_raid (or raid) - Head out on a raid.",
                "help (or h) - Show this list.",
                "quit (or q) - Exit the game.",
            ]
        };
        lines.extend(entries.iter().map(|entry| (*entry).to_owned()));
        lines
    }
}

fn listing(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return vec!["  (empty)".to_owned()];
    }
    items.iter().map(|info| format!("  - {info}")).collect()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
