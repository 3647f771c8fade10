//! CharacterSnapshot - Immutable, fully-resolved calculator input

use super::summary::StatsSummary;
use crate::types::{DamageTag, Job, PrimaryStat, WeaponType};
use serde::{Deserialize, Serialize};

/// A damage-reduction skill at its learned level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveReduction {
    pub name: String,
    /// Reduction in percent
    pub percent: f64,
    pub applies_to: Vec<DamageTag>,
    #[serde(default)]
    pub halved_vs_boss: bool,
}

impl ActiveReduction {
    /// Reduction against a hit tagged `tag`, 0 when the skill does not apply
    pub fn effective(&self, tag: DamageTag, boss: bool) -> f64 {
        if !self.applies_to.contains(&tag) {
            return 0.0;
        }
        if boss && self.halved_vs_boss {
            self.percent / 2.0
        } else {
            self.percent
        }
    }
}

/// A bonus-evasion skill at its learned level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEvasion {
    pub name: String,
    /// Avoid chance in percent
    pub chance: f64,
    pub physical: bool,
    pub magic: bool,
}

/// Everything the calculators read about a character
///
/// Pure values are stored as allocated; the main stat is replaced by its
/// back-computed value when final stats are derived.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterSnapshot {
    pub level: u32,
    pub job: Job,
    pub weapon: Option<WeaponType>,
    pub pure_str: i32,
    pub pure_dex: i32,
    pub pure_int: i32,
    pub pure_luk: i32,
    pub equipment: StatsSummary,
    pub buff1_value: i32,
    pub buff2_value: i32,
    pub mastery_percent: u32,
    pub mastery_flat_attack: i32,
    pub self_buff_level: u32,
    pub self_buff_enabled: bool,
    /// Flat-percentage multiplicative buff
    pub echo: bool,
    /// Flat acc/eva/pdef/mdef from passive skills
    pub passive: StatsSummary,
    /// Flat pdef/mdef/acc/eva/speed/jump from typed-in buffs
    pub buff: StatsSummary,
    pub active_reductions: Vec<ActiveReduction>,
    pub bonus_evasion: Vec<ActiveEvasion>,
    pub absorption: bool,
    pub base_hp: i32,
    pub base_mp: i32,
}

impl CharacterSnapshot {
    /// Stored pure value of `stat`, before main-stat substitution
    pub fn pure(&self, stat: PrimaryStat) -> i32 {
        match stat {
            PrimaryStat::Str => self.pure_str,
            PrimaryStat::Dex => self.pure_dex,
            PrimaryStat::Int => self.pure_int,
            PrimaryStat::Luk => self.pure_luk,
        }
    }

    pub fn set_pure(&mut self, stat: PrimaryStat, value: i32) {
        match stat {
            PrimaryStat::Str => self.pure_str = value,
            PrimaryStat::Dex => self.pure_dex = value,
            PrimaryStat::Int => self.pure_int = value,
            PrimaryStat::Luk => self.pure_luk = value,
        }
    }

    /// Reductions that apply to a hit tagged `tag`, in percent
    pub fn reductions_for(&self, tag: DamageTag, boss: bool) -> Vec<f64> {
        self.active_reductions
            .iter()
            .map(|r| r.effective(tag, boss))
            .filter(|r| *r > 0.0)
            .collect()
    }

    /// Combined bonus evasion as a fraction
    pub fn bonus_evasion(&self, magic: bool) -> f64 {
        self.bonus_evasion
            .iter()
            .filter(|e| if magic { e.magic } else { e.physical })
            .fold(0.0, |acc, e| {
                crate::rules::combine_independent(acc, e.chance / 100.0)
            })
    }
}
