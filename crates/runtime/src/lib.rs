//! Runtime orchestration for the survival-extraction game.
//!
//! This crate wires the pure rules of `game-core` to the outside world: it
//! loads content through `game-content`, keeps the player profile in a
//! [`ProfileRepository`], seeds randomness and logs what happens. Clients
//! embed [`Runtime`] and feed it parsed commands.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`repository`] persists the profile (JSON file or in memory)
//! - [`config`] reads runtime settings from the environment
pub mod config;
pub mod error;
pub mod repository;
pub mod runtime;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use repository::{
    FileProfileRepository, InMemoryProfileRepository, ProfileRepository, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, Startup};
