//! Combat - Hit rates and resolution of a monster's attacks

mod accuracy;
mod resolution;
mod result;

pub use accuracy::{accuracy_needed, hit_rate, HitFormula};
pub use resolution::{calculate_rates, hit_formula, resolve_incoming};
pub use result::{IncomingDamageReport, IncomingEntry, RateReport};
