//! PassiveSource - Flat stats from learned passive skills

use crate::character::StatsSummary;
use crate::derived::StatAccumulator;
use crate::source::StatSource;

pub struct PassiveSource {
    pub summary: StatsSummary,
}

impl PassiveSource {
    pub fn new(summary: StatsSummary) -> Self {
        PassiveSource { summary }
    }
}

impl StatSource for PassiveSource {
    fn id(&self) -> &str {
        "passives"
    }

    fn priority(&self) -> i32 {
        100 // After gear, before buffs
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.acc_flat += self.summary.acc;
        stats.eva_flat += self.summary.eva;
        stats.pdef_flat += self.summary.pdef;
        stats.mdef_flat += self.summary.mdef;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passive_defensive_only() {
        let source = PassiveSource::new(StatsSummary {
            acc: 20,
            eva: 20,
            // Passives never carry attack; ignored if present
            attack: 99,
            ..Default::default()
        });
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        assert_eq!(acc.acc_flat, 20);
        assert_eq!(acc.eva_flat, 20);
        assert_eq!(acc.attack_flat, 0);
        assert_eq!(source.priority(), 100);
    }
}
