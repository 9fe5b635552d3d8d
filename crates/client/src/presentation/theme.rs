//! ANSI colour scheme for console output.

use std::fmt::Display;

use crossterm::style::{Color, Stylize, style};
use game_core::{HealthStatus, StaminaStatus};

/// Semantic role of a piece of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Location,
    Good,
    Bad,
    Warning,
    Item,
    Enemy,
    Muted,
}

/// Maps tones to terminal styles, or to nothing when colour is off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// No escape codes at all; used for tests and `TEXTRACT_NO_COLOR`.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, tone: Tone, text: impl Display) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = style(text);
        let styled = match tone {
            Tone::Heading => styled.with(Color::Yellow).bold(),
            Tone::Location => styled.with(Color::Cyan).bold(),
            Tone::Good => styled.with(Color::Green),
            Tone::Bad => styled.with(Color::Red),
            Tone::Warning => styled.with(Color::DarkYellow),
            Tone::Item => styled.with(Color::Magenta),
            Tone::Enemy => styled.with(Color::Red).bold(),
            Tone::Muted => styled.with(Color::DarkGrey),
        };
        styled.to_string()
    }

    pub fn health(&self, status: HealthStatus) -> String {
        let tone = match status {
            HealthStatus::Healthy => Tone::Good,
            HealthStatus::LightlyWounded => Tone::Warning,
            _ => Tone::Bad,
        };
        self.paint(tone, status)
    }

    pub fn stamina(&self, status: StaminaStatus) -> String {
        let tone = match status {
            StaminaStatus::Normal => Tone::Good,
            StaminaStatus::Winded => Tone::Warning,
            _ => Tone::Bad,
        };
        self.paint(tone, status)
    }
}
