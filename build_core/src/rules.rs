//! Shared rounding, clamping and probability rules
//!
//! Every calculator rounds the same way: values are truncated toward zero
//! (an ordinary floor for the non-negative operands the formulas produce),
//! damage never drops below 1, and percentages are clamped to their bounds.

/// Smallest damage any landed hit can do
pub const MIN_DAMAGE: i64 = 1;

/// Truncate toward zero
pub fn truncate(value: f64) -> i64 {
    if value.is_finite() {
        value.trunc() as i64
    } else {
        0
    }
}

/// Truncate a raw damage value and apply the minimum-1 rule
pub fn floor_damage(value: f64) -> i64 {
    truncate(value).max(MIN_DAMAGE)
}

/// Clamp a percentage to `[floor, ceiling]`
pub fn clamp_percent(value: f64, floor: f64, ceiling: f64) -> f64 {
    if value.is_nan() {
        return floor;
    }
    value.clamp(floor, ceiling)
}

/// Combine two independent chances (as fractions 0..=1)
///
/// `1 - (1 - base) × (1 - bonus)`: the chance at least one of them succeeds.
pub fn combine_independent(base: f64, bonus: f64) -> f64 {
    let base = base.clamp(0.0, 1.0);
    let bonus = bonus.clamp(0.0, 1.0);
    1.0 - (1.0 - base) * (1.0 - bonus)
}

/// Multiplier left after stacking percentage reductions multiplicatively
///
/// `Π(1 - damR_i / 100)`, each reduction clamped to 0..=100.
pub fn reduction_multiplier<I>(reductions: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    reductions
        .into_iter()
        .map(|r| 1.0 - r.clamp(0.0, 100.0) / 100.0)
        .product()
}
