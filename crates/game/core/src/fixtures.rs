//! Small hand-built catalog and map shared by unit tests.

use crate::env::{
    ArmorData, ArmorSlot, ConfigSnapshot, ConsumableData, ConsumableEffect, GearPool,
    ItemDefinition, ItemKind, ItemOracle, ItemsSnapshot, NpcSnapshot, OracleSnapshot, StartingKit,
    WeaponClass, WeaponData,
};
use crate::state::{
    Container, Exit, Item, Location, LocationId, LocationRange, RangeBand, Weight, WorldGraph,
};

fn weapon(name: &str, damage: u32, range: RangeBand, grams: u32, caliber: &str) -> ItemDefinition {
    ItemDefinition::new(
        name,
        "A test weapon.",
        Weight::from_grams(grams),
        damage * 1_000,
        ItemKind::Weapon(WeaponData {
            damage,
            class: WeaponClass::Ranged,
            optimal_range: range,
            caliber: Some(caliber.to_owned()),
        }),
    )
}

fn armor(name: &str, defense: u32, slot: ArmorSlot, grams: u32) -> ItemDefinition {
    ItemDefinition::new(
        name,
        "Test protection.",
        Weight::from_grams(grams),
        defense * 2_000 + 1_000,
        ItemKind::Armor(ArmorData { defense, slot }),
    )
}

fn consumable(name: &str, effect: ConsumableEffect, magnitude: u32, grams: u32) -> ItemDefinition {
    ItemDefinition::new(
        name,
        "Test supplies.",
        Weight::from_grams(grams),
        4_000,
        ItemKind::Consumable(ConsumableData { effect, magnitude }),
    )
}

fn misc(name: &str, grams: u32) -> ItemDefinition {
    ItemDefinition::new(
        name,
        "Test loot.",
        Weight::from_grams(grams),
        1_000,
        ItemKind::Misc,
    )
}

pub fn items() -> ItemsSnapshot {
    ItemsSnapshot::new([
        weapon("AKM", 35, RangeBand::Medium, 4_500, "7.62x39mm"),
        weapon("AK-74N", 30, RangeBand::Medium, 4_000, "5.45x39mm"),
        weapon("MP5", 25, RangeBand::Short, 3_000, "9x19mm Parabellum"),
        weapon("Makarov PM", 15, RangeBand::Short, 1_500, "9x18mm Makarov"),
        weapon("TOZ-106", 35, RangeBand::VeryShort, 2_000, "12 gauge"),
        weapon("SVD", 60, RangeBand::Long, 7_000, "7.62x54mmR"),
        weapon("Mosin", 50, RangeBand::Long, 6_000, "7.62x54mmR"),
        armor("PACA Body Armor", 5, ArmorSlot::Body, 5_000),
        armor("Tarbank Armor", 4, ArmorSlot::Body, 4_000),
        armor("Kirasa Armor", 10, ArmorSlot::Body, 8_000),
        armor("Gen4 Armor", 15, ArmorSlot::Body, 12_000),
        armor("SSh-68 Helmet", 3, ArmorSlot::Head, 2_000),
        armor("UN Helmet", 2, ArmorSlot::Head, 1_500),
        armor("Kolpak-1 Helmet", 5, ArmorSlot::Head, 3_000),
        armor("Altyn Helmet", 12, ArmorSlot::Head, 7_000),
        consumable("AI-2 Medkit", ConsumableEffect::Heal, 50, 500),
        consumable("Painkillers", ConsumableEffect::StaminaRestore, 30, 200),
        consumable("Bandage", ConsumableEffect::CureBleeding, 0, 100),
        consumable("Esmarch Tourniquet", ConsumableEffect::CureBleeding, 0, 100),
        consumable("Chocolate Bar", ConsumableEffect::StaminaRestore, 10, 100),
        misc("Bolts", 100),
        misc("Nuts", 100),
        misc("Matches", 100),
    ])
}

/// Fresh instance of a catalog item.
pub fn item(name: &str) -> Item {
    items()
        .instantiate(name)
        .unwrap_or_else(|err| panic!("fixture catalog: {err}"))
}

fn exit(direction: &str, target: u16) -> Exit {
    Exit {
        direction: direction.to_owned(),
        target: LocationId(target),
    }
}

/// Standalone location with `north` and `south` exits.
pub fn location(range: LocationRange) -> Location {
    let mut location = Location::new(LocationId(0), "Test Site", "A test site.", range);
    location.exits = vec![exit("north", 1), exit("south", 2)];
    location
}

/// Three-node map: Yard (hub), Office, Gate (extraction point).
pub fn world() -> WorldGraph {
    let mut world = WorldGraph::new();

    let mut yard = Location::new(LocationId(0), "Yard", "Open yard.", LocationRange::Medium);
    yard.exits = vec![exit("north", 1), exit("east", 2)];
    yard.items = vec![item("Painkillers")];
    yard.containers = vec![Container::new(
        "Crate",
        "A wooden crate.",
        vec![item("Bolts"), item("Makarov PM")],
    )];
    world.add(yard);

    let mut office = Location::new(LocationId(0), "Office", "Dusty office.", LocationRange::Close);
    office.exits = vec![exit("south", 0)];
    world.add(office);

    let mut gate = Location::new(LocationId(0), "Gate", "The way out.", LocationRange::Long);
    gate.extraction = true;
    gate.exits = vec![exit("west", 0)];
    world.add(gate);

    world
}

pub fn npcs() -> NpcSnapshot {
    let names = |names: &[&str]| names.iter().map(|n| (*n).to_owned()).collect::<Vec<_>>();
    NpcSnapshot {
        regular: GearPool {
            names: names(&["Scav", "Scav Raider"]),
            weapons: names(&["Makarov PM", "TOZ-106"]),
            body_armor: vec![Some("PACA Body Armor".into()), None],
            helmets: vec![Some("UN Helmet".into()), None],
        },
        armored: GearPool {
            names: names(&["Armored Scav", "Raider"]),
            weapons: names(&["AK-74N", "MP5"]),
            body_armor: vec![Some("Kirasa Armor".into()), Some("Tarbank Armor".into())],
            helmets: vec![Some("Kolpak-1 Helmet".into()), Some("SSh-68 Helmet".into())],
        },
        elite: GearPool {
            names: names(&["Heavy Guard", "Elite Scav"]),
            weapons: names(&["SVD", "Mosin"]),
            body_armor: vec![Some("Gen4 Armor".into())],
            helmets: vec![Some("Altyn Helmet".into())],
        },
        common_loot: names(&["Bolts", "Nuts", "Matches", "Chocolate Bar"]),
    }
}

pub fn config() -> ConfigSnapshot {
    let names = |names: &[&str]| names.iter().map(|n| (*n).to_owned()).collect::<Vec<_>>();
    ConfigSnapshot {
        starting_kit: StartingKit {
            roubles: 30_000,
            equipped: names(&["AKM", "Kirasa Armor", "Kolpak-1 Helmet"]),
            inventory: names(&[
                "AI-2 Medkit",
                "AI-2 Medkit",
                "Bandage",
                "Esmarch Tourniquet",
                "Painkillers",
            ]),
            stash: Vec::new(),
        },
        trader_stock: names(&["AI-2 Medkit", "Bandage", "Makarov PM", "PACA Body Armor", "SVD"]),
    }
}

pub fn snapshot() -> OracleSnapshot {
    OracleSnapshot::new(items(), world(), npcs(), config())
}
