//! Static lookup tables: weapon constants, standard defense, skill data
//!
//! The tables ship as TOML under `config/` and are embedded at compile time.
//! [`tables()`] parses them once and hands out a shared read-only reference.

use super::{parse_toml, read, ConfigError, GameConstants};
use crate::types::{DamageTag, Job, WeaponType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

const CONSTANTS_FILE: &str = "constants.toml";
const WEAPONS_FILE: &str = "weapons.toml";
const STANDARD_DEFENSE_FILE: &str = "standard_defense.toml";
const SKILLS_FILE: &str = "skills.toml";

static TABLES: LazyLock<GameTables> = LazyLock::new(|| match GameTables::builtin() {
    Ok(tables) => tables,
    Err(e) => {
        tracing::error!("built-in tables failed to load, using empty tables: {e}");
        GameTables::default()
    }
});

/// Process-wide built-in tables
pub fn tables() -> &'static GameTables {
    &TABLES
}

/// Damage multipliers for one weapon archetype
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponConstant {
    /// Multiplier on the minimum roll
    pub min: f64,
    /// Multiplier on the maximum roll
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeaponEntry {
    weapon: WeaponType,
    min: f64,
    max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeaponsFile {
    weapons: Vec<WeaponEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StandardDefenseEntry {
    job: Job,
    /// (level, standard physical defense) pairs in ascending level order
    breakpoints: Vec<(u32, i32)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StandardDefenseFile {
    standard_defense: Vec<StandardDefenseEntry>,
}

/// Level-scaling self buff: level → percentage of each pure stat
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfBuffTable {
    pub name: String,
    /// Entry `i` is the bonus percentage at level `i + 1`
    pub bonus_percent: Vec<u32>,
}

/// Whether a preset feeds attack or magic power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffKind {
    Attack,
    Magic,
}

/// Named attack/magic buff with a fixed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffPreset {
    pub id: String,
    pub name: String,
    pub kind: BuffKind,
    pub value: i32,
}

/// Passive skill granting flat defensive stats per level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassiveSkill {
    pub id: String,
    pub name: String,
    pub job: Job,
    pub max_level: u32,
    #[serde(default)]
    pub acc_per_level: i32,
    #[serde(default)]
    pub eva_per_level: i32,
    #[serde(default)]
    pub pdef_per_level: i32,
    #[serde(default)]
    pub mdef_per_level: i32,
}

/// Skill reducing incoming damage by a percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionSkill {
    pub id: String,
    pub name: String,
    pub job: Job,
    pub max_level: u32,
    /// Reduction at level 0 before per-level growth (only used when level > 0)
    #[serde(default)]
    pub base: f64,
    pub per_level: f64,
    /// Damage tags the reduction applies to
    pub applies_to: Vec<DamageTag>,
    /// Reduction is halved against bosses
    #[serde(default)]
    pub halved_vs_boss: bool,
}

impl ReductionSkill {
    /// Reduction percentage at `level` (0 when not learned, capped at 100)
    pub fn reduction_at(&self, level: u32) -> f64 {
        if level == 0 {
            return 0.0;
        }
        let level = level.min(self.max_level) as f64;
        (self.base + self.per_level * level).clamp(0.0, 100.0)
    }

    pub fn applies_to(&self, tag: DamageTag) -> bool {
        self.applies_to.contains(&tag)
    }
}

/// Skill granting an independent chance to avoid a hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvasionSkill {
    pub id: String,
    pub name: String,
    pub job: Job,
    pub max_level: u32,
    /// Avoid chance in percent per level
    pub per_level: f64,
    #[serde(default = "default_true")]
    pub physical: bool,
    #[serde(default = "default_true")]
    pub magic: bool,
}

impl EvasionSkill {
    /// Avoid chance in percent at `level`
    pub fn chance_at(&self, level: u32) -> f64 {
        let level = level.min(self.max_level) as f64;
        (self.per_level * level).clamp(0.0, 100.0)
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SkillsFile {
    self_buff: SelfBuffTable,
    #[serde(default)]
    buff_presets: Vec<BuffPreset>,
    #[serde(default)]
    passives: Vec<PassiveSkill>,
    #[serde(default)]
    reduction_skills: Vec<ReductionSkill>,
    #[serde(default)]
    evasion_skills: Vec<EvasionSkill>,
}

/// All static data the calculators read
#[derive(Debug, Clone, Default)]
pub struct GameTables {
    pub constants: GameConstants,
    weapons: HashMap<WeaponType, WeaponConstant>,
    standard_defense: HashMap<Job, Vec<(u32, i32)>>,
    pub self_buff: SelfBuffTable,
    pub buff_presets: Vec<BuffPreset>,
    pub passives: Vec<PassiveSkill>,
    pub reduction_skills: Vec<ReductionSkill>,
    pub evasion_skills: Vec<EvasionSkill>,
}

impl GameTables {
    /// Parse the tables embedded in the crate
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(
            include_str!("../../config/constants.toml"),
            include_str!("../../config/weapons.toml"),
            include_str!("../../config/standard_defense.toml"),
            include_str!("../../config/skills.toml"),
        )
    }

    /// Load tables from a directory holding the same file names as `config/`.
    /// `constants.toml` is optional.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let constants_path = dir.join(CONSTANTS_FILE);
        let constants = if constants_path.exists() {
            read(&constants_path)?
        } else {
            String::new()
        };
        let weapons = read(&dir.join(WEAPONS_FILE))?;
        let standard_defense = read(&dir.join(STANDARD_DEFENSE_FILE))?;
        let skills = read(&dir.join(SKILLS_FILE))?;

        let tables = Self::parse(&constants, &weapons, &standard_defense, &skills)?;
        tracing::info!("loaded game tables from {}", dir.display());
        Ok(tables)
    }

    /// Parse and validate the four table sources
    pub fn parse(
        constants: &str,
        weapons: &str,
        standard_defense: &str,
        skills: &str,
    ) -> Result<Self, ConfigError> {
        let constants: GameConstants = parse_toml(constants)?;
        let weapons_file: WeaponsFile = parse_toml(weapons)?;
        let defense_file: StandardDefenseFile = parse_toml(standard_defense)?;
        let skills_file: SkillsFile = parse_toml(skills)?;

        let mut weapon_map = HashMap::new();
        for entry in weapons_file.weapons {
            if entry.min > entry.max {
                return Err(ConfigError::ValidationError(format!(
                    "weapon {:?} has min constant {} above max {}",
                    entry.weapon, entry.min, entry.max
                )));
            }
            let previous = weapon_map.insert(
                entry.weapon,
                WeaponConstant {
                    min: entry.min,
                    max: entry.max,
                },
            );
            if previous.is_some() {
                return Err(ConfigError::ValidationError(format!(
                    "weapon {:?} listed twice",
                    entry.weapon
                )));
            }
        }

        let mut defense_map = HashMap::new();
        for entry in defense_file.standard_defense {
            if entry.breakpoints.windows(2).any(|w| w[0].0 >= w[1].0) {
                return Err(ConfigError::ValidationError(format!(
                    "standard defense for {:?} must list levels in ascending order",
                    entry.job
                )));
            }
            defense_map.insert(entry.job, entry.breakpoints);
        }

        if skills_file.self_buff.bonus_percent.is_empty() {
            return Err(ConfigError::ValidationError(
                "self buff table has no levels".to_string(),
            ));
        }

        Ok(GameTables {
            constants,
            weapons: weapon_map,
            standard_defense: defense_map,
            self_buff: skills_file.self_buff,
            buff_presets: skills_file.buff_presets,
            passives: skills_file.passives,
            reduction_skills: skills_file.reduction_skills,
            evasion_skills: skills_file.evasion_skills,
        })
    }

    /// Weapon constant pair, `None` for an unknown or missing weapon
    pub fn weapon_constant(&self, weapon: Option<WeaponType>) -> Option<WeaponConstant> {
        let weapon = weapon?;
        let constant = self.weapons.get(&weapon).copied();
        if constant.is_none() {
            tracing::warn!("no weapon constant for {:?}", weapon);
        }
        constant
    }

    /// Standard physical defense for `job` at `level`
    ///
    /// Uses the last breakpoint at or below `level`; 0 below the first
    /// breakpoint or for a job without a table.
    pub fn standard_defense(&self, job: Job, level: u32) -> i32 {
        let Some(breakpoints) = self.standard_defense.get(&job) else {
            tracing::warn!("no standard defense table for {:?}", job);
            return 0;
        };
        breakpoints
            .iter()
            .take_while(|(l, _)| *l <= level)
            .last()
            .map(|(_, def)| *def)
            .unwrap_or(0)
    }

    /// Self-buff bonus percentage at `level` (0 when level is 0)
    pub fn self_buff_percent(&self, level: u32) -> u32 {
        if level == 0 {
            return 0;
        }
        let table = &self.self_buff.bonus_percent;
        let index = (level as usize - 1).min(table.len().saturating_sub(1));
        if level as usize > table.len() {
            tracing::warn!(
                "self buff level {} beyond table ({} levels), using top entry",
                level,
                table.len()
            );
        }
        table.get(index).copied().unwrap_or(0)
    }

    pub fn buff_preset(&self, id: &str) -> Option<&BuffPreset> {
        self.buff_presets.iter().find(|p| p.id == id)
    }

    pub fn passive(&self, id: &str) -> Option<&PassiveSkill> {
        self.passives.iter().find(|p| p.id == id)
    }

    pub fn reduction_skill(&self, id: &str) -> Option<&ReductionSkill> {
        self.reduction_skills.iter().find(|s| s.id == id)
    }

    pub fn evasion_skill(&self, id: &str) -> Option<&EvasionSkill> {
        self.evasion_skills.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_parse() {
        let tables = GameTables::builtin().unwrap();
        for weapon in WeaponType::all() {
            assert!(
                tables.weapon_constant(Some(*weapon)).is_some(),
                "Missing weapon constant: {:?}",
                weapon
            );
        }
        assert!(!tables.reduction_skills.is_empty());
        assert!(!tables.buff_presets.is_empty());
    }

    #[test]
    fn test_one_handed_sword_constant() {
        let constant = tables()
            .weapon_constant(Some(WeaponType::OneHandedSword))
            .unwrap();
        assert!((constant.min - 4.0).abs() < f64::EPSILON);
        assert!((constant.max - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_weapon() {
        assert!(tables().weapon_constant(None).is_none());
    }

    #[test]
    fn test_self_buff_table() {
        let tables = tables();
        assert_eq!(tables.self_buff_percent(0), 0);
        assert_eq!(tables.self_buff_percent(1), 1);
        assert_eq!(tables.self_buff_percent(10), 5);
        assert_eq!(tables.self_buff_percent(20), 10);
        // Beyond the table clamps to the top entry
        let top = *tables.self_buff.bonus_percent.last().unwrap();
        assert_eq!(tables.self_buff_percent(999), top);
    }

    #[test]
    fn test_standard_defense_breakpoints() {
        let toml = r#"
[[standard_defense]]
job = "warrior"
breakpoints = [[10, 50], [30, 150], [70, 400]]
"#;
        let tables = GameTables::parse(
            "",
            "weapons = []",
            toml,
            "[self_buff]\nname = \"Test\"\nbonus_percent = [1]",
        )
        .unwrap();

        assert_eq!(tables.standard_defense(Job::Warrior, 5), 0);
        assert_eq!(tables.standard_defense(Job::Warrior, 10), 50);
        assert_eq!(tables.standard_defense(Job::Warrior, 69), 150);
        assert_eq!(tables.standard_defense(Job::Warrior, 200), 400);
        assert_eq!(tables.standard_defense(Job::Thief, 50), 0);
    }

    fn table_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("build_core_{}_{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_from_dir() {
        let dir = table_dir("tables");
        std::fs::write(dir.join(CONSTANTS_FILE), include_str!("../../config/constants.toml")).unwrap();
        std::fs::write(dir.join(WEAPONS_FILE), include_str!("../../config/weapons.toml")).unwrap();
        std::fs::write(
            dir.join(STANDARD_DEFENSE_FILE),
            include_str!("../../config/standard_defense.toml"),
        )
        .unwrap();
        std::fs::write(dir.join(SKILLS_FILE), include_str!("../../config/skills.toml")).unwrap();

        let loaded = GameTables::load_from_dir(&dir).unwrap();
        let builtin = tables();
        assert_eq!(
            loaded.weapon_constant(Some(WeaponType::Spear)).map(|w| (w.min, w.max)),
            builtin.weapon_constant(Some(WeaponType::Spear)).map(|w| (w.min, w.max))
        );
        assert_eq!(
            loaded.standard_defense(Job::Warrior, 70),
            builtin.standard_defense(Job::Warrior, 70)
        );
        assert_eq!(loaded.self_buff_percent(20), builtin.self_buff_percent(20));

        // Constants are optional
        std::fs::remove_file(dir.join(CONSTANTS_FILE)).unwrap();
        assert!(GameTables::load_from_dir(&dir).is_ok());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_dir_missing_file() {
        let dir = table_dir("missing");
        let result = GameTables::load_from_dir(&dir);
        assert!(matches!(result, Err(ConfigError::Read { .. })));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unsorted_breakpoints_rejected() {
        let toml = r#"
[[standard_defense]]
job = "thief"
breakpoints = [[30, 100], [10, 50]]
"#;
        let result = GameTables::parse(
            "",
            "weapons = []",
            toml,
            "[self_buff]\nname = \"Test\"\nbonus_percent = [1]",
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_duplicate_weapon_rejected() {
        let weapons = r#"
[[weapons]]
weapon = "spear"
min = 3.0
max = 5.0

[[weapons]]
weapon = "spear"
min = 3.0
max = 5.0
"#;
        let result = GameTables::parse(
            "",
            weapons,
            "standard_defense = []",
            "[self_buff]\nname = \"Test\"\nbonus_percent = [1]",
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_reduction_skill_levels() {
        let tables = tables();
        let power_guard = tables.reduction_skill("power_guard").unwrap();
        assert!((power_guard.reduction_at(0) - 0.0).abs() < f64::EPSILON);
        assert!(power_guard.halved_vs_boss);
        assert!(power_guard.applies_to(DamageTag::Touch));
        assert!(!power_guard.applies_to(DamageTag::Magic));
        // Levels past the max are capped
        let at_max = power_guard.reduction_at(power_guard.max_level);
        assert!((power_guard.reduction_at(power_guard.max_level + 10) - at_max).abs() < f64::EPSILON);
    }
}
