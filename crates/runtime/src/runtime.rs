//! High-level runtime orchestrator.
//!
//! The runtime owns the loaded content, the player's [`Session`] and the
//! profile repository. Every command goes through [`Runtime::perform`], which
//! applies it to the session and writes whatever the session asks to persist.

use game_content::ContentFactory;
use game_core::{
    Command, CombatDecider, GameConfig, GameEnv, GameError, OracleSnapshot, PcgRng, RaidOutcome,
    Session, TurnReport,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::repository::{FileProfileRepository, ProfileRepository};

/// How the profile was obtained when the runtime started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Startup {
    /// No save existed; a new profile was created from the starting kit.
    NewGame,
    /// The saved profile was loaded.
    Loaded,
    /// The save could not be used and was replaced by a new profile.
    Recovered { reason: String },
}

/// Main runtime that drives one player's game.
pub struct Runtime {
    snapshot: OracleSnapshot,
    session: Session,
    repository: Box<dyn ProfileRepository>,
    rng: PcgRng,
    startup: Startup,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn env(&self) -> GameEnv<'_> {
        self.snapshot.env()
    }

    pub fn startup(&self) -> &Startup {
        &self.startup
    }

    /// Apply one command and persist the result.
    ///
    /// Rejected commands come back inside the report. An error means the
    /// session advanced but its save could not be written.
    pub fn perform(
        &mut self,
        command: Command,
        decider: &mut dyn CombatDecider,
    ) -> Result<TurnReport> {
        let verb = command.verb();
        let was_in_raid = self.session.in_raid();

        let env = self.snapshot.env();
        let report = self.session.perform(command, &env, &mut self.rng, decider);

        if let Some(err) = &report.rejection {
            tracing::debug!(verb, code = err.error_code(), "Command rejected: {}", err);
        }
        if !was_in_raid && let Some(raid) = self.session.raid() {
            tracing::info!(
                location = %raid.current().name,
                actions = raid.remaining,
                "Raid started"
            );
        }
        if let Some(outcome) = report.outcome {
            log_raid_end(outcome, &report);
        }
        if report.quit_requested() && self.session.in_raid() {
            tracing::info!("Quit mid-raid; the pre-raid checkpoint stays on disk");
        }

        if let Some(save) = &report.save {
            tracing::info!(kind = save.kind(), "Persisting profile");
            self.repository.save(save.record())?;
        }

        Ok(report)
    }
}

fn log_raid_end(outcome: RaidOutcome, report: &TurnReport) {
    let lost = report
        .events
        .iter()
        .find_map(|event| match event {
            game_core::GameEvent::RaidEnded { lost, .. } => Some(lost.len()),
            _ => None,
        })
        .unwrap_or_default();
    tracing::info!(%outcome, lost, "Raid ended");
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<(OracleSnapshot, GameConfig)>,
    repository: Option<Box<dyn ProfileRepository>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            repository: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use already-loaded content instead of reading it through
    /// [`ContentFactory`].
    pub fn content(mut self, snapshot: OracleSnapshot, game_config: GameConfig) -> Self {
        self.content = Some((snapshot, game_config));
        self
    }

    /// Store the profile somewhere other than the configured save file.
    pub fn repository(mut self, repository: impl ProfileRepository + 'static) -> Self {
        self.repository = Some(Box::new(repository));
        self
    }

    /// Seed the RNG for reproducible raids.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the runtime, loading content and the saved profile.
    pub fn build(self) -> Result<Runtime> {
        let (snapshot, game_config) = match self.content {
            Some(content) => content,
            None => load_content(&self.config)?,
        };

        let repository = match self.repository {
            Some(repository) => repository,
            None => Box::new(FileProfileRepository::new(
                &self.config.save_dir,
                &self.config.profile_file,
            )?),
        };

        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        tracing::debug!(seed, "Seeded RNG");

        let (session, startup) = load_or_new(game_config, &snapshot, repository.as_ref())?;

        Ok(Runtime {
            snapshot,
            session,
            repository,
            rng: PcgRng::new(seed),
            startup,
        })
    }
}

fn load_content(config: &RuntimeConfig) -> Result<(OracleSnapshot, GameConfig)> {
    let factory = match &config.content_dir {
        Some(dir) => {
            tracing::info!("Loading content from {}", dir.display());
            ContentFactory::new(dir)
        }
        None => ContentFactory::embedded(),
    };
    let snapshot = factory.load_snapshot().map_err(RuntimeError::Content)?;
    let game_config = factory.load_config().map_err(RuntimeError::Content)?;
    tracing::debug!(
        locations = snapshot.world.len(),
        items = snapshot.items.len(),
        "Content loaded"
    );
    Ok((snapshot, game_config))
}

/// Restores the saved profile, falling back to a new game when there is none
/// or it cannot be used.
fn load_or_new(
    game_config: GameConfig,
    snapshot: &OracleSnapshot,
    repository: &dyn ProfileRepository,
) -> Result<(Session, Startup)> {
    let env = snapshot.env();

    let reason = match repository.load() {
        Ok(Some(record)) => match Session::from_record(game_config.clone(), &record, &env) {
            Ok(session) => {
                tracing::info!(
                    roubles = record.roubles,
                    raids = record.raids_survived,
                    "Loaded profile"
                );
                return Ok((session, Startup::Loaded));
            }
            Err(err) => Some(err.to_string()),
        },
        Ok(None) => None,
        // Unreadable and malformed saves alike fall back to a new game.
        Err(err) => Some(err.to_string()),
    };

    let session = Session::new_game(game_config, &env)?;
    repository.save(&session.to_record())?;

    match reason {
        Some(reason) => {
            tracing::warn!("Save could not be used, starting a new profile: {}", reason);
            Ok((session, Startup::Recovered { reason }))
        }
        None => {
            tracing::info!("No save found, starting a new profile");
            Ok((session, Startup::NewGame))
        }
    }
}
