//! Scenario and data file loading

use anyhow::{Context, Result};
use build_core::config::{load_json, load_toml};
use build_core::{BuffState, CharacterState, EquipmentSlot, GameTables, Item, Job, MonsterState, PrimaryStat};
use serde::Deserialize;
use std::path::Path;

pub const SCENARIO_FILE: &str = "scenario.toml";
pub const ITEMS_FILE: &str = "items.json";
pub const MONSTERS_FILE: &str = "monsters.json";

/// Starting character and target, as written in `scenario.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub character: CharacterSetup,
    #[serde(default)]
    pub buffs: BuffState,
    /// Monster id from `monsters.json`
    #[serde(default)]
    pub monster: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterSetup {
    pub level: u32,
    #[serde(default)]
    pub job: Job,
    #[serde(default)]
    pub base_hp: Option<i32>,
    #[serde(default)]
    pub base_mp: Option<i32>,
    #[serde(default)]
    pub str: Option<i32>,
    #[serde(default)]
    pub dex: Option<i32>,
    #[serde(default)]
    pub int: Option<i32>,
    #[serde(default)]
    pub luk: Option<i32>,
    /// Item ids from `items.json`, worn in their own slots
    #[serde(default)]
    pub equipped: Vec<String>,
}

impl CharacterSetup {
    fn pure(&self, stat: PrimaryStat) -> Option<i32> {
        match stat {
            PrimaryStat::Str => self.str,
            PrimaryStat::Dex => self.dex,
            PrimaryStat::Int => self.int,
            PrimaryStat::Luk => self.luk,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemsFile {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct MonstersFile {
    monsters: Vec<MonsterState>,
}

pub fn load_scenario(path: &Path) -> Result<Scenario> {
    load_toml(path).with_context(|| format!("loading scenario {}", path.display()))
}

pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let file: ItemsFile =
        load_json(path).with_context(|| format!("loading items {}", path.display()))?;
    Ok(file.items)
}

pub fn load_monsters(path: &Path) -> Result<Vec<MonsterState>> {
    let file: MonstersFile =
        load_json(path).with_context(|| format!("loading monsters {}", path.display()))?;
    Ok(file.monsters)
}

impl Scenario {
    /// Build the character through the validated setters
    pub fn build_character(&self, inventory: &[Item], tables: &GameTables) -> Result<CharacterState> {
        let setup = &self.character;
        let mut character = CharacterState::new(setup.level, setup.job)?;
        if let Some(hp) = setup.base_hp {
            character.base_hp = hp;
        }
        if let Some(mp) = setup.base_mp {
            character.base_mp = mp;
        }

        // The weapon decides a pirate's main stat
        for id in &setup.equipped {
            let item = inventory
                .iter()
                .find(|item| &item.id == id)
                .with_context(|| format!("scenario equips unknown item '{}'", id))?;
            let slot = free_slot(&character, item);
            character.equip(slot, item.clone())?;
        }

        let main_stat = character.main_stat();
        for &stat in PrimaryStat::all() {
            let Some(value) = setup.pure(stat) else {
                continue;
            };
            if Some(stat) == main_stat {
                tracing::warn!("scenario sets main stat {}, ignoring", stat.name());
                continue;
            }
            character.set_pure_stat(stat, value)?;
        }

        *character.buffs_mut() = self.buffs.clone();
        for (slot, buff) in [(1u8, self.buffs.buff1.clone()), (2u8, self.buffs.buff2.clone())] {
            character.set_attack_buff(slot, buff, tables)?;
        }

        tracing::info!(
            "scenario character: level {} {}, {} items",
            character.level(),
            character.job().name(),
            character.equipment().len()
        );
        Ok(character)
    }
}

/// Slot an item goes into: its own, or the first empty ring slot for rings
pub fn free_slot(character: &CharacterState, item: &Item) -> EquipmentSlot {
    if !item.slot.is_ring() {
        return item.slot;
    }
    EquipmentSlot::all()
        .iter()
        .copied()
        .filter(|slot| slot.is_ring())
        .find(|slot| character.equipment().get(*slot).is_none())
        .unwrap_or(item.slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_core::{tables, AttackBuff, StatsSummary, WeaponType};

    fn ring(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            slot: EquipmentSlot::Ring1,
            full_body: false,
            weapon_type: None,
            stats: StatsSummary {
                luk: 2,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_parse_scenario() {
        let scenario: Scenario = toml::from_str(
            r#"
            monster = "stone_golem"

            [character]
            level = 70
            job = "thief"
            luk = 250
            dex = 80
            equipped = ["ring_a", "ring_b"]

            [buffs]
            mastery = 60
            buff1 = { preset = "rage" }
            "#,
        )
        .unwrap();

        let inventory = vec![ring("ring_a"), ring("ring_b")];
        let character = scenario.build_character(&inventory, tables()).unwrap();

        assert_eq!(scenario.monster.as_deref(), Some("stone_golem"));
        assert_eq!(character.level(), 70);
        // Main stat is back-computed, the value in the file is dropped
        assert_eq!(character.pure().luk, 4);
        assert_eq!(character.pure().dex, 80);
        assert_eq!(character.buffs().mastery.percent(), 60);
        assert_eq!(character.buffs().buff1, AttackBuff::Preset("rage".to_string()));
        assert!(character.equipment().get(EquipmentSlot::Ring1).is_some());
        assert!(character.equipment().get(EquipmentSlot::Ring2).is_some());
    }

    #[test]
    fn test_pirate_gun_keeps_str() {
        let scenario: Scenario = toml::from_str(
            r#"
            [character]
            level = 70
            job = "pirate"
            str = 20
            dex = 300
            equipped = ["gun"]
            "#,
        )
        .unwrap();

        let gun = Item {
            id: "gun".to_string(),
            name: "Gun".to_string(),
            slot: EquipmentSlot::Weapon,
            full_body: false,
            weapon_type: Some(WeaponType::Gun),
            stats: StatsSummary {
                attack: 50,
                ..Default::default()
            },
        };
        let character = scenario.build_character(&[gun], tables()).unwrap();

        // With a gun DEX is derived, so the file's DEX is the one dropped
        assert_eq!(character.main_stat(), Some(PrimaryStat::Dex));
        assert_eq!(character.pure().str, 20);
    }

    #[test]
    fn test_unknown_item_is_an_error() {
        let scenario: Scenario = toml::from_str(
            r#"
            [character]
            level = 30
            job = "warrior"
            equipped = ["missing"]
            "#,
        )
        .unwrap();

        assert!(scenario.build_character(&[], tables()).is_err());
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let scenario: Scenario = toml::from_str(
            r#"
            [character]
            level = 30
            job = "warrior"

            [buffs]
            buff2 = { preset = "not_a_buff" }
            "#,
        )
        .unwrap();

        assert!(scenario.build_character(&[], tables()).is_err());
    }
}
