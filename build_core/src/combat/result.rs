//! Report types for incoming damage and rates

use crate::damage::{DamageRange, HitCount};
use crate::types::DamageTag;
use serde::{Deserialize, Serialize};

/// One monster attack as the character would take it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingEntry {
    /// "Touch" or the skill name
    pub name: String,
    pub tag: DamageTag,
    /// Attack value that went into the formula
    pub attack: i32,
    /// Range straight out of the defense formula
    pub base: DamageRange,
    /// Range after reductions, power-up and absorption
    pub final_range: DamageRange,
    /// Combined reduction-skill multiplier
    pub reduction_multiplier: f64,
    /// Power-up or magic-up multiplier
    pub power_multiplier: f64,
    /// Hits the character survives at full HP
    pub hits_to_die: Option<HitCount>,
}

/// Every incoming attack of a monster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomingDamageReport {
    pub entries: Vec<IncomingEntry>,
}

impl IncomingDamageReport {
    /// Hardest-hitting entry by final max
    pub fn worst(&self) -> Option<&IncomingEntry> {
        self.entries.iter().max_by_key(|e| e.final_range.max)
    }

    pub fn touch(&self) -> Option<&IncomingEntry> {
        self.entries.iter().find(|e| e.tag == DamageTag::Touch)
    }
}

/// Hit and evasion percentages against one monster
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateReport {
    /// Chance the character hits the monster
    pub hit_rate: f64,
    /// Accuracy needed for a guaranteed hit, `None` if unreachable
    pub accuracy_needed: Option<i32>,
    /// Chance to dodge a physical hit, before bonus evasion
    pub physical_evasion: f64,
    /// Chance to dodge a magic hit, before bonus evasion
    pub magic_evasion: f64,
    /// Physical dodge chance with bonus evasion folded in
    pub physical_evasion_total: f64,
    /// Magic dodge chance with bonus evasion folded in
    pub magic_evasion_total: f64,
}
