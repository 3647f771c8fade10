//! GearSource - Stats from equipped items

use crate::character::StatsSummary;
use crate::derived::StatAccumulator;
use crate::source::StatSource;

/// Summed flat bonuses of everything worn
pub struct GearSource {
    pub summary: StatsSummary,
}

impl GearSource {
    pub fn new(summary: StatsSummary) -> Self {
        GearSource { summary }
    }
}

impl StatSource for GearSource {
    fn id(&self) -> &str {
        "gear"
    }

    fn priority(&self) -> i32 {
        0
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.add_summary(&self.summary);
    }
}
