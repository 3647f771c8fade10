//! Monster - Combat attributes of the selected target

use crate::types::{AttackKind, DamageTag, Element};
use serde::{Deserialize, Serialize};

/// A named monster attack skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterAttack {
    pub name: String,
    pub kind: AttackKind,
    #[serde(default)]
    pub element: Option<Element>,
    /// Attack value replacing the monster's base PAD or MAD for this skill
    #[serde(default)]
    pub attack: Option<i32>,
}

impl MonsterAttack {
    pub fn tag(&self) -> DamageTag {
        DamageTag::for_attack(self.kind, self.element)
    }
}

/// Numbers the calculators read about a monster
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MonsterSnapshot {
    pub level: u32,
    /// Physical attack
    #[serde(default)]
    pub pad: i32,
    /// Magic attack
    #[serde(default)]
    pub mad: i32,
    #[serde(default)]
    pub acc: i32,
    #[serde(default)]
    pub eva: i32,
    #[serde(default)]
    pub max_hp: i64,
    #[serde(default)]
    pub pdef: i32,
    #[serde(default)]
    pub mdef: i32,
    #[serde(default)]
    pub boss: bool,
    /// Physical power-up buff active
    #[serde(default)]
    pub power_up: bool,
    /// Magic-up buff active
    #[serde(default)]
    pub magic_up: bool,
    #[serde(default)]
    pub attacks: Vec<MonsterAttack>,
}

impl MonsterSnapshot {
    /// Attack value used by `attack`
    pub fn attack_value(&self, attack: &MonsterAttack) -> i32 {
        attack.attack.unwrap_or(match attack.kind {
            AttackKind::Physical => self.pad,
            AttackKind::Magic => self.mad,
        })
    }

    /// Whether the power-up or magic-up buff matching `kind` is on
    pub fn powered(&self, kind: AttackKind) -> bool {
        match kind {
            AttackKind::Physical => self.power_up,
            AttackKind::Magic => self.magic_up,
        }
    }
}

/// A monster as listed in data files
///
/// Replaced wholesale when another monster is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterState {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub stats: MonsterSnapshot,
}

impl MonsterState {
    pub fn snapshot(&self) -> MonsterSnapshot {
        self.stats.clone()
    }
}
