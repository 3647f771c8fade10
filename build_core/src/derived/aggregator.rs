//! StatAccumulator - Collects contributions from every stat source

use crate::character::StatsSummary;
use crate::types::PrimaryStat;

/// Where one primary stat's total came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatBreakdown {
    /// Allocated value (main stat back-computed)
    pub pure: i32,
    /// Flat bonus from gear
    pub equipment: i32,
    /// Self-buff bonus
    pub buff: i32,
}

impl StatBreakdown {
    pub fn total(&self) -> i32 {
        self.pure + self.equipment + self.buff
    }
}

/// Accumulates stat contributions from various sources
///
/// Sources are applied in priority order, so later sources may read what
/// earlier ones wrote (the self buff scales the pure values).
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    // === Primary stats ===
    pub str: StatBreakdown,
    pub dex: StatBreakdown,
    pub int: StatBreakdown,
    pub luk: StatBreakdown,

    // === Offense ===
    pub attack_flat: i32,
    pub magic_flat: i32,
    /// Multiplicative buffs on attack and magic power
    pub power_more: Vec<f64>,

    // === Accuracy ===
    pub acc_flat: i32,
    pub eva_flat: i32,
    pub macc_flat: i32,

    // === Defenses ===
    pub pdef_flat: i32,
    pub mdef_flat: i32,

    // === Movement ===
    pub speed_flat: i32,
    pub jump_flat: i32,

    // === Resources ===
    pub hp_flat: i32,
    pub mp_flat: i32,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }

    pub fn primary(&self, stat: PrimaryStat) -> &StatBreakdown {
        match stat {
            PrimaryStat::Str => &self.str,
            PrimaryStat::Dex => &self.dex,
            PrimaryStat::Int => &self.int,
            PrimaryStat::Luk => &self.luk,
        }
    }

    pub fn primary_mut(&mut self, stat: PrimaryStat) -> &mut StatBreakdown {
        match stat {
            PrimaryStat::Str => &mut self.str,
            PrimaryStat::Dex => &mut self.dex,
            PrimaryStat::Int => &mut self.int,
            PrimaryStat::Luk => &mut self.luk,
        }
    }

    /// Fold in flat gear-style bonuses. Primary stats count as equipment.
    pub fn add_summary(&mut self, summary: &StatsSummary) {
        self.str.equipment += summary.str;
        self.dex.equipment += summary.dex;
        self.int.equipment += summary.int;
        self.luk.equipment += summary.luk;
        self.attack_flat += summary.attack;
        self.magic_flat += summary.mad;
        self.acc_flat += summary.acc;
        self.eva_flat += summary.eva;
        self.macc_flat += summary.macc;
        self.pdef_flat += summary.pdef;
        self.mdef_flat += summary.mdef;
        self.speed_flat += summary.speed;
        self.jump_flat += summary.jump;
        self.hp_flat += summary.hp;
        self.mp_flat += summary.mp;
    }

    /// Product of every multiplicative power buff
    pub fn power_multiplier(&self) -> f64 {
        self.power_more.iter().product()
    }
}
