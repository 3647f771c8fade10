//! PureStatsSource - Allocated points and base HP/MP

use crate::derived::StatAccumulator;
use crate::source::StatSource;
use crate::types::PrimaryStat;

/// Allocated stat points, with the main stat back-computed
pub struct PureStatsSource {
    /// (stat, allocated value), one entry per primary stat
    pub allocated: [(PrimaryStat, i32); 4],
    /// Stat whose value is derived rather than allocated
    pub main_stat: Option<PrimaryStat>,
    /// Total points available at the character's level
    pub total_points: i32,
    pub base_hp: i32,
    pub base_mp: i32,
}

impl PureStatsSource {
    /// Value the main stat takes: every point not spent on the other three
    pub fn main_stat_value(&self) -> Option<i32> {
        let main = self.main_stat?;
        let others: i32 = self
            .allocated
            .iter()
            .filter(|(stat, _)| *stat != main)
            .map(|(_, value)| *value)
            .sum();
        Some(self.total_points - others)
    }
}

impl StatSource for PureStatsSource {
    fn id(&self) -> &str {
        "pure_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Pure stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        let main_value = self.main_stat_value();
        for &(stat, value) in &self.allocated {
            let value = match (self.main_stat, main_value) {
                (Some(main), Some(derived)) if main == stat => derived,
                _ => value,
            };
            stats.primary_mut(stat).pure += value;
        }

        stats.hp_flat += self.base_hp;
        stats.mp_flat += self.base_mp;
    }
}
