//! Evasion rates - Chance the character dodges a monster's hit
//!
//! Rates are percentages. The base rate is clamped to the job's
//! [floor, ceiling]; bonus evasion from skills then combines with it as an
//! independent chance.

use crate::rules::{clamp_percent, combine_independent};

/// `eva / (4.5 × monster_acc)`, ceiling when the monster has no accuracy
pub fn physical_evasion_rate(eva: i32, monster_acc: i32, bounds: (f64, f64)) -> f64 {
    let (floor, ceiling) = bounds;
    if monster_acc <= 0 {
        return ceiling;
    }
    let rate = eva as f64 / (4.5 * monster_acc as f64) * 100.0;
    clamp_percent(rate, floor, ceiling)
}

/// `10/9 − monster_acc / (0.9 × eva)`, ceiling when either side is zero
pub fn magic_evasion_rate(eva: i32, monster_acc: i32, bounds: (f64, f64)) -> f64 {
    let (floor, ceiling) = bounds;
    if monster_acc <= 0 || eva <= 0 {
        return ceiling;
    }
    let rate = (10.0 / 9.0 - monster_acc as f64 / (0.9 * eva as f64)) * 100.0;
    clamp_percent(rate, floor, ceiling)
}

/// Base rate (percent) combined with bonus evasion (fraction), in percent
pub fn combined_evasion_rate(base_percent: f64, bonus: f64) -> f64 {
    combine_independent(base_percent / 100.0, bonus) * 100.0
}
