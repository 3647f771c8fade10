//! Derived stats - Totals, attack power, accuracy and defense

mod aggregator;
mod computed;

pub use aggregator::{StatAccumulator, StatBreakdown};
pub use computed::{calculate_final_stats, sources_for, FinalStats};
