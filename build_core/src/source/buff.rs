//! BuffSource - Self buff, attack buffs, echo and flat defensive buffs

use crate::character::StatsSummary;
use crate::derived::StatAccumulator;
use crate::source::StatSource;
use crate::types::PrimaryStat;

/// Active buffs, already resolved to numbers
#[derive(Debug, Clone, Default)]
pub struct BuffSource {
    /// Self-buff percentage of each pure stat (0 when off)
    pub self_buff_percent: u32,
    /// buff1 + buff2 (+ mastery flat attack for non-magicians)
    pub buff_pool: i32,
    /// Whether the pool feeds magic power instead of attack
    pub feeds_magic: bool,
    /// Echo multiplier when the buff is on
    pub echo: Option<f64>,
    /// Typed-in flat defensive and movement buffs
    pub defensive: StatsSummary,
}

impl StatSource for BuffSource {
    fn id(&self) -> &str {
        "buffs"
    }

    fn priority(&self) -> i32 {
        200 // Buffs apply after passives
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        // Scales pure values only, each stat on its own
        if self.self_buff_percent > 0 {
            let percent = self.self_buff_percent as i32;
            for &stat in PrimaryStat::all() {
                let breakdown = stats.primary_mut(stat);
                breakdown.buff += breakdown.pure * percent / 100;
            }
        }

        if self.feeds_magic {
            stats.magic_flat += self.buff_pool;
        } else {
            stats.attack_flat += self.buff_pool;
        }

        if let Some(multiplier) = self.echo {
            stats.power_more.push(multiplier);
        }

        stats.pdef_flat += self.defensive.pdef;
        stats.mdef_flat += self.defensive.mdef;
        stats.acc_flat += self.defensive.acc;
        stats.eva_flat += self.defensive.eva;
        stats.speed_flat += self.defensive.speed;
        stats.jump_flat += self.defensive.jump;
    }
}
