//! End-to-end profile persistence: new game, checkpoints, commits and
//! recovery, all against a real save file in a temporary directory.

use std::fs;
use std::path::Path;

use game_content::ContentFactory;
use game_core::{
    Command, Exit, FixedAim, GameConfig, HitZone, ItemOracle, Location, LocationId,
    LocationRange, OracleSnapshot, Phase, RaidOutcome, ShopOrder, WorldGraph,
};
use runtime::{
    FileProfileRepository, InMemoryProfileRepository, ProfileRepository, RepositoryError, Runtime,
    RuntimeConfig, Startup,
};

fn config_in(dir: &Path) -> RuntimeConfig {
    RuntimeConfig {
        save_dir: dir.to_path_buf(),
        profile_file: "profile.json".into(),
        seed: Some(11),
        content_dir: None,
    }
}

fn saved(dir: &Path) -> game_core::ProfileRecord {
    FileProfileRepository::new(dir, "profile.json")
        .unwrap()
        .load()
        .unwrap()
        .expect("a profile on disk")
}

/// Embedded items and economy on a one-location map: an enemy-free
/// extraction point with `loot` on the ground.
fn landing_pad(loot: &[&str]) -> OracleSnapshot {
    let factory = ContentFactory::embedded();
    let items = factory.load_items().unwrap();

    let mut pad = Location::new(LocationId(0), "Landing Pad", "A cracked helipad.", LocationRange::Long);
    pad.extraction = true;
    pad.exits.push(Exit {
        direction: "north".into(),
        target: LocationId(0),
    });
    pad.items = loot
        .iter()
        .map(|name| items.instantiate(name).unwrap())
        .collect();
    let mut world = WorldGraph::new();
    world.add(pad);

    OracleSnapshot::new(items, world, factory.load_npcs().unwrap(), factory.load_trade().unwrap())
}

fn aim() -> FixedAim {
    FixedAim(HitZone::Body)
}

#[test]
fn new_game_writes_profile_file() {
    let dir = tempfile::tempdir().unwrap();

    let runtime = Runtime::builder().config(config_in(dir.path())).build().unwrap();

    assert_eq!(runtime.startup(), &Startup::NewGame);
    let record = saved(dir.path());
    assert_eq!(record.roubles, 30_000);
    assert_eq!(record.equipped_weapon.as_deref(), Some("AKM"));
    assert_eq!(record.equipped_armor.as_deref(), Some("Kirasa Armor"));
    assert_eq!(record.equipped_helmet.as_deref(), Some("Kolpak-1 Helmet"));
    assert_eq!(record.inventory.len(), 5);
    assert_eq!(record.raids_survived, 0);
}

#[test]
fn hideout_purchase_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut runtime = Runtime::builder().config(config_in(dir.path())).build().unwrap();
        let report = runtime
            .perform(Command::Shop(ShopOrder::Buy("bandage".into())), &mut aim())
            .unwrap();
        assert!(!report.is_rejected(), "{:?}", report.rejection);
    }

    let runtime = Runtime::builder().config(config_in(dir.path())).build().unwrap();

    assert_eq!(runtime.startup(), &Startup::Loaded);
    let player = &runtime.session().player;
    assert_eq!(player.roubles, 29_000);
    assert_eq!(player.inventory.names().filter(|name| *name == "Bandage").count(), 2);
}

#[test]
fn corrupt_save_is_replaced_with_new_game() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("profile.json"), "{\"roubles\": \"lots\"").unwrap();

    let runtime = Runtime::builder().config(config_in(dir.path())).build().unwrap();

    assert!(matches!(runtime.startup(), Startup::Recovered { .. }));
    assert_eq!(saved(dir.path()).roubles, 30_000);
}

#[test]
fn saves_leave_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut runtime = Runtime::builder().config(config_in(dir.path())).build().unwrap();
    runtime
        .perform(Command::Unequip("helmet".into()), &mut aim())
        .unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["profile.json"]);
    assert_eq!(saved(dir.path()).equipped_helmet, None);
}

#[test]
fn raid_start_checkpoints_without_gear() {
    let dir = tempfile::tempdir().unwrap();
    let mut runtime = Runtime::builder().config(config_in(dir.path())).build().unwrap();

    let report = runtime.perform(Command::StartRaid, &mut aim()).unwrap();

    assert!(runtime.session().in_raid());
    assert!(report.save.is_some());
    let record = saved(dir.path());
    assert!(!record.has_gear());
    assert_eq!(record.roubles, 30_000);

    // A crash mid-raid comes back to the hideout without the carried gear.
    drop(runtime);
    let runtime = Runtime::builder().config(config_in(dir.path())).build().unwrap();
    assert_eq!(runtime.startup(), &Startup::Loaded);
    assert_eq!(runtime.session().phase(), &Phase::Hideout);
    assert!(runtime.session().player.inventory.is_empty());
    assert!(runtime.session().player.equipment.weapon().is_none());
}

#[test]
fn extraction_commits_raid_loot() {
    let dir = tempfile::tempdir().unwrap();
    let mut runtime = Runtime::builder()
        .config(config_in(dir.path()))
        .content(landing_pad(&["Gold Chain"]), GameConfig::default())
        .build()
        .unwrap();

    runtime.perform(Command::StartRaid, &mut aim()).unwrap();
    runtime.perform(Command::Get("gold".into()), &mut aim()).unwrap();
    let report = runtime.perform(Command::Extract, &mut aim()).unwrap();

    assert_eq!(report.outcome, Some(RaidOutcome::Extracted));
    let record = saved(dir.path());
    assert_eq!(record.raids_survived, 1);
    assert!(record.inventory.iter().any(|name| name == "Gold Chain"));
    assert_eq!(record.equipped_weapon.as_deref(), Some("AKM"));
    assert_eq!(record, runtime.session().to_record());
}

#[test]
fn timeout_rolls_back_to_checkpoint() {
    let dir = tempfile::tempdir().unwrap();
    let mut runtime = Runtime::builder()
        .config(config_in(dir.path()))
        .content(landing_pad(&["Gold Chain"]), GameConfig::with_raid_actions(1))
        .build()
        .unwrap();

    runtime.perform(Command::StartRaid, &mut aim()).unwrap();
    let report = runtime.perform(Command::Get("gold".into()), &mut aim()).unwrap();

    assert_eq!(report.outcome, Some(RaidOutcome::TimedOut));
    assert!(!runtime.session().in_raid());
    let record = saved(dir.path());
    assert!(!record.has_gear());
    assert_eq!(record.raids_survived, 0);
    assert_eq!(record.roubles, 30_000);
}

#[test]
fn in_memory_repository_counts_commits_only() {
    let repository = std::sync::Arc::new(InMemoryProfileRepository::new());
    let mut runtime = Runtime::builder()
        .seed(3)
        .repository(SharedRepository(repository.clone()))
        .build()
        .unwrap();
    assert_eq!(repository.save_count(), 1);

    runtime.perform(Command::Stats, &mut aim()).unwrap();
    runtime.perform(Command::Look, &mut aim()).unwrap();
    assert_eq!(repository.save_count(), 1);

    runtime
        .perform(Command::Shop(ShopOrder::Sell("painkillers".into())), &mut aim())
        .unwrap();
    assert_eq!(repository.save_count(), 2);
    assert!(repository.exists());
}

#[test]
fn unreadable_save_is_replaced_with_new_game() {
    let repository = std::sync::Arc::new(InMemoryProfileRepository::new());

    let runtime = Runtime::builder()
        .seed(11)
        .repository(UnreadableRepository(repository.clone()))
        .build()
        .unwrap();

    let Startup::Recovered { reason } = runtime.startup() else {
        panic!("expected recovery, got {:?}", runtime.startup());
    };
    assert!(reason.contains("permission denied"), "{reason}");
    assert_eq!(runtime.session().player.roubles, 30_000);
    assert_eq!(repository.save_count(), 1);
}

/// Saves go through; every load fails as if the file were not readable.
struct UnreadableRepository(std::sync::Arc<InMemoryProfileRepository>);

impl ProfileRepository for UnreadableRepository {
    fn load(&self) -> Result<Option<game_core::ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        )))
    }

    fn save(&self, record: &game_core::ProfileRecord) -> Result<(), RepositoryError> {
        self.0.save(record)
    }

    fn exists(&self) -> bool {
        true
    }

    fn delete(&self) -> Result<(), RepositoryError> {
        self.0.delete()
    }
}

/// Lets the test keep a handle on the repository the runtime owns.
struct SharedRepository(std::sync::Arc<InMemoryProfileRepository>);

impl ProfileRepository for SharedRepository {
    fn load(&self) -> Result<Option<game_core::ProfileRecord>, RepositoryError> {
        self.0.load()
    }

    fn save(&self, record: &game_core::ProfileRecord) -> Result<(), RepositoryError> {
        self.0.save(record)
    }

    fn exists(&self) -> bool {
        self.0.exists()
    }

    fn delete(&self) -> Result<(), RepositoryError> {
        self.0.delete()
    }
}
