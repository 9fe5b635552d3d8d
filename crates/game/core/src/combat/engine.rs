//! Round-by-round fight resolution between the player and one enemy.

use super::damage::{self, ENEMY_DAMAGE_SPREAD, PLAYER_DAMAGE_SPREAD};
use super::flee::flee_chance;
use super::hit::{
    ENEMY_HEADSHOT_CHANCE, PLAYER_HEADSHOT_CHANCE, enemy_hit_chance, head_aim_chance,
    player_hit_chance,
};
use super::result::{AttackResult, CombatEvent, CombatOutcome, CombatReport, RoundOutcome};
use crate::config::GameConfig;
use crate::env::{Chance, RandomSource};
use crate::error::ActionError;
use crate::state::{Combatant, Enemy, HitZone, Location, Player, RangeBand};

/// Chance that a damaging enemy hit opens a wound.
pub const BLEED_CHANCE: Chance = Chance::percent(25);

/// The player's decision for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatChoice {
    Aim(HitZone),
    /// Run through the named exit.
    Flee(String),
}

/// What a decider sees before choosing.
#[derive(Debug)]
pub struct CombatView<'a> {
    pub player: &'a Player,
    pub enemy: &'a Enemy,
    pub location: &'a Location,
    /// Events produced since the previous decision.
    pub events: &'a [CombatEvent],
    /// Why the previous choice was refused; the round was not played.
    pub rejected: Option<&'a ActionError>,
}

/// Supplies the player's choice each round.
///
/// Implementations range from an interactive console prompt to scripted
/// deciders in tests.
pub trait CombatDecider {
    fn decide(&mut self, view: &CombatView<'_>) -> CombatChoice;
}

/// Decider that always aims at the same zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedAim(pub HitZone);

impl CombatDecider for FixedAim {
    fn decide(&mut self, _view: &CombatView<'_>) -> CombatChoice {
        CombatChoice::Aim(self.0)
    }
}

/// Fights until one side dies or the player escapes.
///
/// A refused choice (unknown flee direction) is reported back to the decider
/// through [`CombatView::rejected`] and the round is asked for again.
pub fn resolve_combat(
    player: &mut Player,
    enemy: &mut Enemy,
    location: &Location,
    decider: &mut dyn CombatDecider,
    rng: &mut dyn RandomSource,
) -> CombatReport {
    let mut events = Vec::new();
    if !player.is_alive() {
        return CombatReport {
            outcome: CombatOutcome::PlayerDied,
            events,
        };
    }
    if !enemy.is_alive() {
        return CombatReport {
            outcome: CombatOutcome::EnemyDefeated,
            events,
        };
    }

    let mut seen = 0;
    let mut rejected: Option<ActionError> = None;
    loop {
        let choice = decider.decide(&CombatView {
            player: &*player,
            enemy: &*enemy,
            location,
            events: &events[seen..],
            rejected: rejected.as_ref(),
        });
        seen = events.len();

        match resolve_round(player, enemy, location, &choice, rng, &mut events) {
            Ok(RoundOutcome::Continue) => rejected = None,
            Ok(RoundOutcome::Finished(outcome)) => return CombatReport { outcome, events },
            Err(err) => rejected = Some(err),
        }
    }
}

/// Plays a single round for `choice`, appending what happened to `events`.
///
/// Returns an error without touching any state when a flee direction does
/// not name an exit of `location`.
pub fn resolve_round(
    player: &mut Player,
    enemy: &mut Enemy,
    location: &Location,
    choice: &CombatChoice,
    rng: &mut dyn RandomSource,
    events: &mut Vec<CombatEvent>,
) -> Result<RoundOutcome, ActionError> {
    let band = location.range.band();
    match choice {
        CombatChoice::Aim(aimed) => {
            player_attack(player, enemy, location, *aimed, rng, events);
            if !enemy.is_alive() {
                events.push(CombatEvent::EnemyDefeated {
                    enemy: enemy.name().to_owned(),
                });
                return Ok(RoundOutcome::Finished(CombatOutcome::EnemyDefeated));
            }
            enemy_attack(player, enemy, Some(band), false, rng, events);
        }
        CombatChoice::Flee(direction) => {
            // With nowhere to run every attempt fails outright.
            let (direction, chance) = if location.exits.is_empty() {
                (direction.clone(), Chance::ZERO)
            } else {
                let exit = location.exit(direction)?;
                (
                    exit.direction.clone(),
                    flee_chance(player.carried_weight(), player.capacity()),
                )
            };
            let success = chance > Chance::ZERO && rng.check(chance);
            events.push(CombatEvent::FleeAttempt {
                direction: direction.clone(),
                chance,
                success,
            });
            if success {
                player.stamina.restore(GameConfig::FLEE_STAMINA_REGEN);
                return Ok(RoundOutcome::Finished(CombatOutcome::Fled { direction }));
            }
            enemy_attack(player, enemy, None, true, rng, events);
        }
    }

    if !player.is_alive() {
        events.push(CombatEvent::PlayerDied {
            killed_by: enemy.name().to_owned(),
        });
        return Ok(RoundOutcome::Finished(CombatOutcome::PlayerDied));
    }
    Ok(RoundOutcome::Continue)
}

fn player_attack(
    player: &Player,
    enemy: &mut Enemy,
    location: &Location,
    aimed: HitZone,
    rng: &mut dyn RandomSource,
    events: &mut Vec<CombatEvent>,
) {
    let (weapon_damage, weapon_range) = player.attack_profile();
    let raw = damage::roll_raw(weapon_damage, PLAYER_DAMAGE_SPREAD, rng);

    let body_chance = player_hit_chance(location.range.band(), weapon_range);
    let chance = match aimed {
        HitZone::Head => head_aim_chance(body_chance),
        HitZone::Body => body_chance,
    };

    let result = if rng.check(chance) {
        let zone = if aimed == HitZone::Head && rng.check(PLAYER_HEADSHOT_CHANCE) {
            HitZone::Head
        } else {
            HitZone::Body
        };
        let amount = match zone {
            HitZone::Head => damage::headshot(raw),
            HitZone::Body => raw,
        };
        let report = enemy.take_damage(amount, zone);
        AttackResult::Hit {
            zone,
            damage: report.effective,
        }
    } else {
        AttackResult::Miss
    };

    events.push(CombatEvent::PlayerAttack {
        aimed,
        chance,
        result,
        condition: location
            .range
            .reveals_condition()
            .then(|| enemy.condition()),
    });
}

/// One enemy attack. `band` is `None` for the bonus attack after a failed flee.
fn enemy_attack(
    player: &mut Player,
    enemy: &Enemy,
    band: Option<RangeBand>,
    bonus: bool,
    rng: &mut dyn RandomSource,
    events: &mut Vec<CombatEvent>,
) {
    let raw = damage::roll_raw(enemy.damage(), ENEMY_DAMAGE_SPREAD, rng);
    let chance = enemy_hit_chance(enemy.hit_chance(), band);

    let mut wounded = false;
    let result = if rng.check(chance) {
        let aimed = if rng.pick(2) == 0 {
            HitZone::Head
        } else {
            HitZone::Body
        };
        let zone = if aimed == HitZone::Head && rng.check(ENEMY_HEADSHOT_CHANCE) {
            HitZone::Head
        } else {
            HitZone::Body
        };
        let amount = match zone {
            HitZone::Head => damage::headshot(raw),
            HitZone::Body => raw,
        };
        let report = player.take_damage(amount, zone);
        if report.effective > 0 {
            let rolled = rng.check(BLEED_CHANCE);
            let uncovered_head = zone == HitZone::Head && !player.equipment.has_helmet();
            wounded = (rolled || uncovered_head) && player.start_bleeding();
        }
        AttackResult::Hit {
            zone,
            damage: report.effective,
        }
    } else {
        AttackResult::Miss
    };

    events.push(CombatEvent::EnemyAttack {
        enemy: enemy.name().to_owned(),
        bonus,
        result,
    });
    if wounded {
        events.push(CombatEvent::BleedingStarted);
    }
    player.stamina.restore(GameConfig::COMBAT_STAMINA_REGEN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::fixtures;
    use crate::state::{EnemyTier, Equipment, LocationRange};

    /// Replays queued choices, then aims at the body.
    struct Script {
        choices: Vec<CombatChoice>,
        views: Vec<(usize, bool)>,
    }

    impl Script {
        fn new(choices: Vec<CombatChoice>) -> Self {
            Self { choices, views: Vec::new() }
        }
    }

    impl CombatDecider for Script {
        fn decide(&mut self, view: &CombatView<'_>) -> CombatChoice {
            self.views.push((view.events.len(), view.rejected.is_some()));
            if self.choices.is_empty() {
                CombatChoice::Aim(HitZone::Body)
            } else {
                self.choices.remove(0)
            }
        }
    }

    fn scav(health: u32) -> Enemy {
        Enemy::new("Scav", EnemyTier::Regular, health, 12, Chance::percent(45))
    }

    fn armed_player() -> Player {
        let mut player = Player::new("PMC");
        player.equipment.equip(fixtures::item("AKM")).unwrap();
        player
    }

    #[test]
    fn body_shot_kills_and_skips_enemy_turn() {
        let mut player = armed_player();
        let mut enemy = scav(30);
        let location = fixtures::location(LocationRange::Medium);
        // damage +0, hit roll under 85%
        let mut rng = ScriptedRng::new().with_ranges([0]).with_rolls([8_499]);

        let report = resolve_combat(
            &mut player,
            &mut enemy,
            &location,
            &mut FixedAim(HitZone::Body),
            &mut rng,
        );

        assert_eq!(report.outcome, CombatOutcome::EnemyDefeated);
        assert_eq!(
            report.events[0],
            CombatEvent::PlayerAttack {
                aimed: HitZone::Body,
                chance: Chance::percent(85),
                result: AttackResult::Hit {
                    zone: HitZone::Body,
                    damage: 30
                },
                condition: None,
            }
        );
        assert!(matches!(report.events[1], CombatEvent::EnemyDefeated { .. }));
        assert_eq!(player.stamina.current, 100);
        assert!(rng.is_drained());
    }

    #[test]
    fn player_headshot_doubles_twice_without_helmet() {
        let mut player = armed_player();
        let mut enemy = scav(200);
        let location = fixtures::location(LocationRange::Close);
        let mut events = Vec::new();
        // player: +5 damage; hit, headshot. enemy: misses.
        let mut rng = ScriptedRng::new()
            .with_ranges([5, 0])
            .with_rolls([0, 0, 9_999]);

        let outcome = resolve_round(
            &mut player,
            &mut enemy,
            &location,
            &CombatChoice::Aim(HitZone::Head),
            &mut rng,
            &mut events,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Continue);
        // (35 + 5) * 2 raw, no helmet doubles again
        assert_eq!(enemy.health.current, 40);
        let CombatEvent::PlayerAttack { chance, condition, .. } = &events[0] else {
            panic!("expected player attack first");
        };
        // close range: 75 - 5 for a medium weapon, minus the head penalty
        assert_eq!(*chance, Chance::percent(40));
        assert_eq!(*condition, Some(crate::state::EnemyCondition::Critical));
    }

    #[test]
    fn enemy_head_hit_on_bare_head_forces_bleeding() {
        let mut player = armed_player();
        player.equipment.equip(fixtures::item("PACA Body Armor")).unwrap();
        let mut enemy = scav(200);
        let location = fixtures::location(LocationRange::Medium);
        let mut events = Vec::new();
        // player misses; enemy: +0 damage, hits, aims head, headshot, bleed roll fails
        let mut rng = ScriptedRng::new()
            .with_ranges([0, 0, 0])
            .with_rolls([9_999, 0, 0, 9_999]);

        resolve_round(
            &mut player,
            &mut enemy,
            &location,
            &CombatChoice::Aim(HitZone::Body),
            &mut rng,
            &mut events,
        )
        .unwrap();

        // 12 * 2 raw, no helmet defense, then * 1.5
        assert_eq!(player.health.current, 64);
        assert!(player.is_bleeding());
        assert_eq!(
            events[1],
            CombatEvent::EnemyAttack {
                enemy: "Scav".into(),
                bonus: false,
                result: AttackResult::Hit {
                    zone: HitZone::Head,
                    damage: 36
                },
            }
        );
        assert_eq!(events[2], CombatEvent::BleedingStarted);
        assert!(rng.is_drained());
    }

    #[test]
    fn armored_body_hit_needs_bleed_roll() {
        let mut player = armed_player();
        player.equipment.equip(fixtures::item("PACA Body Armor")).unwrap();
        let mut enemy = scav(200);
        let location = fixtures::location(LocationRange::Long);
        let mut events = Vec::new();
        // player misses; enemy +3 damage, hits, aims body, bleed roll fails
        let mut rng = ScriptedRng::new()
            .with_ranges([0, 3, 1])
            .with_rolls([9_999, 0, 9_999]);

        resolve_round(
            &mut player,
            &mut enemy,
            &location,
            &CombatChoice::Aim(HitZone::Body),
            &mut rng,
            &mut events,
        )
        .unwrap();

        assert_eq!(player.health.current, 90);
        assert!(!player.is_bleeding());
    }

    #[test]
    fn helmet_absorbs_head_hit_without_extra_damage() {
        let mut player = armed_player();
        player.equipment.equip(fixtures::item("Kolpak-1 Helmet")).unwrap();
        let mut enemy = scav(200);
        let location = fixtures::location(LocationRange::Medium);
        let mut events = Vec::new();
        // player misses; enemy: +0 damage, hits, aims head, headshot, bleed roll fails
        let mut rng = ScriptedRng::new()
            .with_ranges([0, 0, 0])
            .with_rolls([9_999, 0, 0, 9_999]);

        resolve_round(
            &mut player,
            &mut enemy,
            &location,
            &CombatChoice::Aim(HitZone::Body),
            &mut rng,
            &mut events,
        )
        .unwrap();

        // 12 * 2 raw, minus 5 helmet defense, no bare-head multiplier
        assert_eq!(player.health.current, 81);
        assert!(!player.is_bleeding());
        assert_eq!(
            events[1],
            CombatEvent::EnemyAttack {
                enemy: "Scav".into(),
                bonus: false,
                result: AttackResult::Hit {
                    zone: HitZone::Head,
                    damage: 19
                },
            }
        );
        assert_eq!(events.len(), 2);
        assert!(rng.is_drained());
    }

    #[test]
    fn armored_body_hit_bleeds_on_successful_roll() {
        let mut player = armed_player();
        player.equipment.equip(fixtures::item("PACA Body Armor")).unwrap();
        let mut enemy = scav(200);
        let location = fixtures::location(LocationRange::Long);
        let mut events = Vec::new();
        // player misses; enemy +3 damage, hits, aims body, bleed roll succeeds
        let mut rng = ScriptedRng::new()
            .with_ranges([0, 3, 1])
            .with_rolls([9_999, 0, 0]);

        resolve_round(
            &mut player,
            &mut enemy,
            &location,
            &CombatChoice::Aim(HitZone::Body),
            &mut rng,
            &mut events,
        )
        .unwrap();

        // 15 raw minus 5 armor
        assert_eq!(player.health.current, 90);
        assert!(player.is_bleeding());
        assert_eq!(events[2], CombatEvent::BleedingStarted);
        assert!(rng.is_drained());
    }

    #[test]
    fn failed_flee_grants_bonus_attack_and_stamina() {
        let mut player = armed_player();
        player.stamina.set(50);
        let mut enemy = scav(200);
        let location = fixtures::location(LocationRange::Long);
        let mut events = Vec::new();
        // flee fails; bonus attack misses
        let mut rng = ScriptedRng::new().with_rolls([9_999, 9_999]);

        let outcome = resolve_round(
            &mut player,
            &mut enemy,
            &location,
            &CombatChoice::Flee("nor".into()),
            &mut rng,
            &mut events,
        )
        .unwrap();

        assert_eq!(outcome, RoundOutcome::Continue);
        assert!(matches!(
            &events[0],
            CombatEvent::FleeAttempt { direction, success: false, .. } if direction == "north"
        ));
        assert!(matches!(
            events[1],
            CombatEvent::EnemyAttack { bonus: true, result: AttackResult::Miss, .. }
        ));
        assert_eq!(player.stamina.current, 55);
    }

    #[test]
    fn successful_flee_restores_stamina() {
        let mut player = armed_player();
        player.stamina.set(50);
        let mut enemy = scav(200);
        let location = fixtures::location(LocationRange::Short);
        let mut rng = ScriptedRng::new().with_rolls([0]);
        let mut decider = Script::new(vec![
            CombatChoice::Flee("up".into()),
            CombatChoice::Flee("north".into()),
        ]);

        let report = resolve_combat(&mut player, &mut enemy, &location, &mut decider, &mut rng);

        assert_eq!(
            report.outcome,
            CombatOutcome::Fled {
                direction: "north".into()
            }
        );
        assert_eq!(player.stamina.current, 60);
        // the unknown exit was refused without playing a round
        assert_eq!(decider.views, [(0, false), (0, true)]);
    }

    #[test]
    fn no_exits_means_flee_always_fails() {
        let mut player = armed_player();
        let mut enemy = scav(200);
        let mut location = fixtures::location(LocationRange::Short);
        location.exits.clear();
        let mut events = Vec::new();
        let mut rng = ScriptedRng::new().with_rolls([0]);

        resolve_round(
            &mut player,
            &mut enemy,
            &location,
            &CombatChoice::Flee("north".into()),
            &mut rng,
            &mut events,
        )
        .unwrap();

        assert!(matches!(
            events[0],
            CombatEvent::FleeAttempt { success: false, chance: Chance::ZERO, .. }
        ));
        // the only roll went to the bonus attack, which hit
        assert!(matches!(events[1], CombatEvent::EnemyAttack { bonus: true, .. }));
    }

    #[test]
    fn lethal_hit_ends_combat_once() {
        let mut player = Player::new("PMC");
        player.health.set(10);
        let mut enemy = Enemy::new("Heavy Guard", EnemyTier::Elite, 250, 40, Chance::percent(85))
            .with_equipment(Equipment::new());
        let location = fixtures::location(LocationRange::Medium);
        // player misses; enemy hits the body
        let mut rng = ScriptedRng::new().with_ranges([0, 0, 1]).with_rolls([9_999, 0, 0]);

        let report = resolve_combat(
            &mut player,
            &mut enemy,
            &location,
            &mut FixedAim(HitZone::Body),
            &mut rng,
        );

        assert_eq!(report.outcome, CombatOutcome::PlayerDied);
        assert_eq!(
            report.events.last(),
            Some(&CombatEvent::PlayerDied {
                killed_by: "Heavy Guard".into()
            })
        );
        assert_eq!(player.health.current, 0);
        assert!(!player.is_bleeding());
    }
}
