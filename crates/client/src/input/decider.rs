//! Interactive combat choices read from the console.

use std::io::{BufRead, Write};

use game_core::{ActionError, CombatChoice, CombatDecider, CombatView, Combatant, HitZone};

use super::parser::{complete, expand_direction};
use crate::presentation::Renderer;

const CHOICES: &[&str] = &["head", "body", "flee"];

/// Prompts for every combat round and echoes the events of the previous one.
///
/// Events the player has already seen are counted per fight so the final
/// report does not print them twice.
pub struct ConsoleDecider<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
    renderer: &'a Renderer,
    shown: Vec<usize>,
}

impl<'a, R: BufRead, W: Write> ConsoleDecider<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W, renderer: &'a Renderer) -> Self {
        Self {
            input,
            output,
            renderer,
            shown: Vec::new(),
        }
    }

    /// Number of combat events already printed, one entry per fight.
    pub fn into_shown(self) -> Vec<usize> {
        self.shown
    }

    fn say(&mut self, line: &str) {
        if let Err(err) = writeln!(self.output, "{line}") {
            tracing::warn!("Failed to write to console: {}", err);
        }
    }

    /// Reads one trimmed, lowercased line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(err) = write!(self.output, "{prompt}").and_then(|()| self.output.flush()) {
            tracing::warn!("Failed to write to console: {}", err);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
            Err(err) => {
                tracing::warn!("Failed to read combat choice: {}", err);
                None
            }
        }
    }

    fn flee_direction(&mut self, view: &CombatView<'_>, typed: &str) -> Option<String> {
        let exits: Vec<&str> = view
            .location
            .exits
            .iter()
            .map(|exit| exit.direction.as_str())
            .collect();
        if exits.is_empty() {
            return Some(String::new());
        }

        let mut typed = typed.to_owned();
        loop {
            if typed.is_empty() {
                typed = self.ask(&format!("Which direction do you want to flee? ({}) ", exits.join("/")))?;
            }
            match complete(expand_direction(&typed), &exits, "direction") {
                Ok(direction) => return Some(direction.to_owned()),
                Err(err) => {
                    let line = self.renderer.rejection(&err);
                    self.say(&line);
                    typed.clear();
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> CombatDecider for ConsoleDecider<'_, R, W> {
    fn decide(&mut self, view: &CombatView<'_>) -> CombatChoice {
        // Each fight opens with a decision that has nothing to report yet.
        if self.shown.is_empty() || (view.events.is_empty() && view.rejected.is_none()) {
            self.shown.push(0);
        }
        for event in view.events {
            let line = self.renderer.combat_event(event);
            self.say(&line);
        }
        if let Some(count) = self.shown.last_mut() {
            *count += view.events.len();
        }
        if let Some(err) = view.rejected {
            let line = self.renderer.rejection(err);
            self.say(&line);
        }

        let status = self.renderer.combat_status(view);
        self.say(&status);

        loop {
            let prompt = format!(
                "Choose your action (head/body/flee)? [{}] ",
                self.renderer.health_status(view.player)
            );
            // Closed input keeps the fight going with body shots.
            let Some(line) = self.ask(&prompt) else {
                return CombatChoice::Aim(HitZone::Body);
            };
            let (word, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

            match complete(word, CHOICES, "choice") {
                Ok("head") => return CombatChoice::Aim(HitZone::Head),
                Ok("body") => return CombatChoice::Aim(HitZone::Body),
                Ok(_) => match self.flee_direction(view, rest.trim()) {
                    Some(direction) => return CombatChoice::Flee(direction),
                    None => return CombatChoice::Aim(HitZone::Body),
                },
                Err(err) => {
                    let hint = ActionError::invalid(format!(
                        "choose 'head', 'body' or 'flee' to fight {}",
                        view.enemy.name()
                    ));
                    let line = if word.is_empty() { &hint } else { &err };
                    let line = self.renderer.rejection(line);
                    self.say(&line);
                }
            }
        }
    }
}
