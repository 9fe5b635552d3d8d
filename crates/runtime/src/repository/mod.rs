//! Repository layer for data that outlives the process.
//!
//! Only the player profile is persisted. Static game content (items, map,
//! enemy pools) comes from `game-content` and never goes through a repository.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileProfileRepository;
pub use memory::InMemoryProfileRepository;
pub use traits::ProfileRepository;
