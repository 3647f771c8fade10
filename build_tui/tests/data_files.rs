//! Integration test: load the shipped data files -> equip -> calculate
//!
//! Checks that every item and monster the TUI ships with goes through the
//! calculators without surprises.

use build_core::config::load_json;
use build_core::{
    calculate_build, tables, CharacterState, EquipmentSlot, Item, Job, MonsterState,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct ItemsFile {
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct MonstersFile {
    monsters: Vec<MonsterState>,
}

fn data(file: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn items() -> Vec<Item> {
    load_json::<ItemsFile>(&data("items.json")).unwrap().items
}

fn monsters() -> Vec<MonsterState> {
    load_json::<MonstersFile>(&data("monsters.json")).unwrap().monsters
}

#[test]
fn test_every_item_equips_in_its_slot() {
    for item in items() {
        let mut character = CharacterState::new(120, Job::Warrior).unwrap();
        let slot = item.slot;
        let name = item.name.clone();
        assert!(
            character.equip(slot, item).is_ok(),
            "{} does not fit its own slot",
            name
        );
    }
}

#[test]
fn test_every_weapon_has_a_constant() {
    for item in items().into_iter().filter(|i| i.slot == EquipmentSlot::Weapon) {
        assert!(
            tables().weapon_constant(item.weapon_type).is_some(),
            "{} has no weapon constant",
            item.name
        );
    }
}

#[test]
fn test_item_ids_are_unique() {
    let items = items();
    let mut ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}

#[test]
fn test_every_monster_resolves() {
    let mut character = CharacterState::new(120, Job::Warrior).unwrap();
    let sword = items()
        .into_iter()
        .find(|i| i.id == "red_katana")
        .unwrap();
    character.equip(EquipmentSlot::Weapon, sword).unwrap();

    for monster in monsters() {
        let snapshot = monster.snapshot();
        let report = calculate_build(&character, Some(&snapshot), tables());
        let target = report.target.unwrap();

        assert_eq!(
            target.incoming.entries.len(),
            1 + snapshot.attacks.len(),
            "{}",
            monster.name
        );
        for entry in &target.incoming.entries {
            assert!(entry.final_range.min >= 1, "{} {}", monster.name, entry.name);
            assert!(entry.final_range.min <= entry.final_range.max);
        }
        assert!((0.0..=100.0).contains(&target.rates.hit_rate));
        assert!(target.hits_to_kill.is_some());
    }
}

#[test]
fn test_scenario_file_parses() {
    let content = std::fs::read_to_string(data("scenario.toml")).unwrap();
    let scenario: toml::Value = toml::from_str(&content).unwrap();

    let monster = scenario["monster"].as_str().unwrap();
    assert!(monsters().iter().any(|m| m.id == monster));

    let ids = items();
    for id in scenario["character"]["equipped"].as_array().unwrap() {
        let id = id.as_str().unwrap();
        assert!(ids.iter().any(|i| i.id == id), "unknown item {}", id);
    }
}
