//! Damage - Outgoing damage range and hit counts

mod outgoing;
mod range;

pub use outgoing::calculate_outgoing_damage;
pub use range::{hits_to_die, hits_to_kill, DamageRange, HitCount};
