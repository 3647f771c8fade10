//! StatSource - everything that feeds the stat window

mod buff;
mod gear;
mod passive;
mod pure;

pub use buff::BuffSource;
pub use gear::GearSource;
pub use passive::PassiveSource;
pub use pure::PureStatsSource;

use crate::derived::StatAccumulator;

/// Trait for anything that contributes to a character's final stats
pub trait StatSource: Send + Sync {
    /// Short name used in breakdowns and logs
    fn id(&self) -> &str;

    /// Sources apply in ascending priority:
    /// pure stats -100, gear 0, passives 100, buffs 200.
    fn priority(&self) -> i32 {
        0
    }

    /// Add this source's contribution
    fn apply(&self, stats: &mut StatAccumulator);
}

/// Apply `sources` to a fresh accumulator, lowest priority first
pub fn accumulate(sources: &[Box<dyn StatSource>]) -> StatAccumulator {
    let mut sorted: Vec<_> = sources.iter().collect();
    sorted.sort_by_key(|s| s.priority());

    let mut stats = StatAccumulator::new();
    for source in sorted {
        source.apply(&mut stats);
    }
    stats
}
