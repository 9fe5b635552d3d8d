//! Console client for Textract.
//!
//! Reads commands line by line, hands them to the [`runtime::Runtime`] and
//! prints the resulting events. Combat rounds prompt for a choice through
//! [`input::ConsoleDecider`].
pub mod app;
pub mod config;
pub mod input;
pub mod presentation;

pub use app::CliApp;
pub use config::CliConfig;
