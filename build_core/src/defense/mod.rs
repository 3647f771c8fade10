//! Defense - Damage the character takes and the chance to avoid it
//!
//! Base damage comes from the physical or magic formula; both then share the
//! same post-processing pipeline (reduction skills, power-up, absorption).

mod evasion;
mod magic;
mod physical;
mod pipeline;

pub use evasion::{combined_evasion_rate, magic_evasion_rate, physical_evasion_rate};
pub use magic::{magic_damage, magic_defense};
pub use physical::{constant_term, physical_damage};
pub use pipeline::{power_up_multiplier, post_process, PostProcess};

use crate::character::CharacterSnapshot;
use crate::config::GameTables;
use crate::derived::FinalStats;
use crate::types::DefenseProfile;
use serde::{Deserialize, Serialize};

/// Incoming damage formula constants
pub mod constants {
    /// Added to the constant term to form the defense coefficient A
    pub const DEFENSE_COEFFICIENT_OFFSET: f64 = 0.28;
    /// Level penalty used when the monster out-levels the character
    pub const OUTLEVELED_PENALTY: f64 = 1.3;
    /// Squared-attack multipliers for physical hits (min, max)
    pub const PHYSICAL_SPREAD: (f64, f64) = (0.008, 0.0085);
    /// Squared-attack multipliers for magic hits (min, max)
    pub const MAGIC_SPREAD: (f64, f64) = (0.0075, 0.008);
}

/// The defending character's numbers, as the incoming formulas read them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefenderStats {
    pub level: u32,
    pub profile: DefenseProfile,
    pub pdef: i32,
    pub mdef: i32,
    /// Standard physical defense for the job at this level
    pub standard_defense: i32,
    /// K in the magic formula
    pub magic_defense_factor: f64,
    pub str: i32,
    pub dex: i32,
    pub int: i32,
    pub luk: i32,
}

impl DefenderStats {
    pub fn new(snapshot: &CharacterSnapshot, stats: &FinalStats, tables: &GameTables) -> Self {
        let magic_defense_factor = if snapshot.job.is_magician() {
            tables.constants.incoming.magician_magic_defense
        } else {
            1.0
        };
        DefenderStats {
            level: snapshot.level,
            profile: snapshot.job.defense_profile(),
            pdef: stats.pdef,
            mdef: stats.mdef,
            standard_defense: tables.standard_defense(snapshot.job, snapshot.level),
            magic_defense_factor,
            str: stats.total_str,
            dex: stats.total_dex,
            int: stats.total_int,
            luk: stats.total_luk,
        }
    }
}
