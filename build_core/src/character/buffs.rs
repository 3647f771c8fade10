//! Buff state - Self buff, attack buffs, mastery, skill levels

use crate::config::{BuffKind, GameTables};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weapon mastery percentage, always one of the marks 10, 15, ..., 90
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Mastery(u32);

impl Mastery {
    pub const MIN: u32 = 10;
    pub const MAX: u32 = 90;
    pub const STEP: u32 = 5;

    /// Snap `percent` to the nearest mark
    pub fn new(percent: u32) -> Self {
        let clamped = percent.clamp(Self::MIN, Self::MAX);
        let steps = (clamped - Self::MIN + Self::STEP / 2) / Self::STEP;
        Mastery(Self::MIN + steps * Self::STEP)
    }

    pub fn percent(&self) -> u32 {
        self.0
    }

    /// Every selectable mark, lowest first
    pub fn marks() -> impl Iterator<Item = Mastery> {
        (Self::MIN..=Self::MAX).step_by(Self::STEP as usize).map(Mastery)
    }

    pub fn next(self) -> Self {
        Mastery::new(self.0 + Self::STEP)
    }

    pub fn prev(self) -> Self {
        Mastery::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for Mastery {
    fn default() -> Self {
        Mastery(Self::MIN)
    }
}

impl From<u32> for Mastery {
    fn from(percent: u32) -> Self {
        Mastery::new(percent)
    }
}

impl From<Mastery> for u32 {
    fn from(mastery: Mastery) -> Self {
        mastery.0
    }
}

/// One of the two generic attack/magic buff slots
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackBuff {
    #[default]
    None,
    /// A named preset from the skill tables
    Preset(String),
    /// A value typed in by hand
    Manual(i32),
}

impl AttackBuff {
    /// Resolve to a flat value
    ///
    /// Presets of the wrong kind for the job contribute nothing; unknown
    /// presets are logged and ignored.
    pub fn resolve(&self, tables: &GameTables, is_magician: bool) -> i32 {
        match self {
            AttackBuff::None => 0,
            AttackBuff::Manual(value) => *value,
            AttackBuff::Preset(id) => match tables.buff_preset(id) {
                Some(preset) => {
                    let wanted = if is_magician {
                        BuffKind::Magic
                    } else {
                        BuffKind::Attack
                    };
                    if preset.kind == wanted {
                        preset.value
                    } else {
                        0
                    }
                }
                None => {
                    tracing::warn!("unknown buff preset '{}', ignoring", id);
                    0
                }
            },
        }
    }

    pub fn label(&self, tables: &GameTables) -> String {
        match self {
            AttackBuff::None => "-".to_string(),
            AttackBuff::Manual(value) => format!("manual +{}", value),
            AttackBuff::Preset(id) => tables
                .buff_preset(id)
                .map(|p| format!("{} +{}", p.name, p.value))
                .unwrap_or_else(|| format!("{} (unknown)", id)),
        }
    }
}

/// Level-scaling self buff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelfBuff {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub level: u32,
}

impl SelfBuff {
    /// Bonus percentage, 0 when disabled or unlearned
    pub fn percent(&self, tables: &GameTables) -> u32 {
        if self.enabled && self.level > 0 {
            tables.self_buff_percent(self.level)
        } else {
            0
        }
    }
}

/// Flat defensive and movement buffs typed in by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefensiveBuffs {
    pub pdef: i32,
    pub mdef: i32,
    pub acc: i32,
    pub eva: i32,
    pub speed: i32,
    pub jump: i32,
}

/// Everything the user toggles beyond stats and gear
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuffState {
    pub self_buff: SelfBuff,
    pub buff1: AttackBuff,
    pub buff2: AttackBuff,
    /// Flat-percentage multiplicative buff
    pub echo: bool,
    pub mastery: Mastery,
    /// Flat attack granted by the mastery skill (non-magicians only)
    pub mastery_flat_attack: i32,
    /// Passive skill id → level
    pub passives: BTreeMap<String, u32>,
    /// Damage-reduction skill id → level
    pub reduction_skills: BTreeMap<String, u32>,
    /// Bonus-evasion skill id → level
    pub evasion_skills: BTreeMap<String, u32>,
    /// Half-damage absorption mechanic
    pub absorption: bool,
    pub defensive: DefensiveBuffs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tables;

    #[test]
    fn test_mastery_snaps_to_marks() {
        assert_eq!(Mastery::new(60).percent(), 60);
        assert_eq!(Mastery::new(62).percent(), 60);
        assert_eq!(Mastery::new(63).percent(), 65);
        assert_eq!(Mastery::new(0).percent(), 10);
        assert_eq!(Mastery::new(150).percent(), 90);
    }

    #[test]
    fn test_mastery_marks() {
        let marks: Vec<u32> = Mastery::marks().map(|m| m.percent()).collect();
        assert_eq!(marks.len(), 17);
        assert_eq!(marks.first(), Some(&10));
        assert_eq!(marks.last(), Some(&90));
        assert_eq!(Mastery::new(90).next().percent(), 90);
        assert_eq!(Mastery::new(10).prev().percent(), 10);
    }

    #[test]
    fn test_mastery_deserialize_snaps() {
        let mastery: Mastery = serde_json::from_str("57").unwrap();
        assert_eq!(mastery.percent(), 55);
    }

    #[test]
    fn test_attack_buff_resolve() {
        let tables = tables();
        assert_eq!(AttackBuff::None.resolve(tables, false), 0);
        assert_eq!(AttackBuff::Manual(12).resolve(tables, true), 12);
        assert_eq!(AttackBuff::Preset("rage".into()).resolve(tables, false), 20);
        // Attack preset does nothing for a magician
        assert_eq!(AttackBuff::Preset("rage".into()).resolve(tables, true), 0);
        assert_eq!(AttackBuff::Preset("meditation".into()).resolve(tables, true), 20);
        assert_eq!(AttackBuff::Preset("no_such_buff".into()).resolve(tables, false), 0);
    }

    #[test]
    fn test_self_buff_percent() {
        let tables = tables();
        let disabled = SelfBuff {
            enabled: false,
            level: 10,
        };
        assert_eq!(disabled.percent(tables), 0);

        let enabled = SelfBuff {
            enabled: true,
            level: 10,
        };
        assert_eq!(enabled.percent(tables), 5);
    }
}
