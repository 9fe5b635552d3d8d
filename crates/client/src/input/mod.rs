//! Console input: command parsing and combat prompts.
mod decider;
pub mod parser;

pub use decider::ConsoleDecider;
pub use parser::parse;
