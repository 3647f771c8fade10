//! Hit rate - Chance the character lands a hit on a monster

use crate::rules::clamp_percent;
use serde::{Deserialize, Serialize};

/// Per-level shift of a magician's hit chance
const MAGIC_LEVEL_FACTOR: f64 = 0.0415;
/// Base of the physical accuracy requirement
const PHYSICAL_BASE: f64 = 11.0 / 6.0;
/// Extra requirement per level the monster has over the character
const PHYSICAL_PER_LEVEL: f64 = 0.07;

/// Which accuracy formula the attacker uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitFormula {
    /// Magic accuracy against monster avoid, scaled by level difference
    Magic,
    /// Accuracy against the monster's avoid with a level-gap penalty
    Physical,
}

fn physical_requirement(level: u32, monster_level: u32) -> f64 {
    let gap = monster_level.saturating_sub(level) as f64;
    PHYSICAL_BASE + PHYSICAL_PER_LEVEL * gap
}

fn magic_level_scale(level: u32, monster_level: u32) -> f64 {
    1.0 + MAGIC_LEVEL_FACTOR * (level as f64 - monster_level as f64)
}

/// Hit chance in percent, 0..=100
pub fn hit_rate(
    formula: HitFormula,
    accuracy: i32,
    level: u32,
    monster_eva: i32,
    monster_level: u32,
) -> f64 {
    if monster_eva <= 0 {
        return 100.0;
    }
    let acc = accuracy as f64;
    let eva = monster_eva as f64;

    let rate = match formula {
        HitFormula::Magic => acc / (eva + 1.0) * magic_level_scale(level, monster_level) * 100.0,
        HitFormula::Physical => {
            (acc / (physical_requirement(level, monster_level) * eva) - 1.0) * 100.0
        }
    };
    clamp_percent(rate, 0.0, 100.0)
}

/// Accuracy needed for a guaranteed hit
///
/// `None` when no amount of magic accuracy reaches 100% (the character is
/// too far below the monster).
pub fn accuracy_needed(
    formula: HitFormula,
    level: u32,
    monster_eva: i32,
    monster_level: u32,
) -> Option<i32> {
    if monster_eva <= 0 {
        return Some(0);
    }
    let eva = monster_eva as f64;

    match formula {
        HitFormula::Physical => {
            let needed = 2.0 * physical_requirement(level, monster_level) * eva;
            Some(needed.ceil() as i32)
        }
        HitFormula::Magic => {
            let scale = magic_level_scale(level, monster_level);
            if scale <= 0.0 {
                return None;
            }
            Some(((eva + 1.0) / scale).ceil() as i32)
        }
    }
}
