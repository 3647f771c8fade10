//! Post-processing shared by every incoming hit
//!
//! 1. Stack reduction skills multiplicatively, keep at least 1.
//! 2. Work out the absorbed share from that reduced value.
//! 3. Apply the monster's power-up multiplier.
//! 4. Subtract the absorbed share, keep at least 1.

use crate::config::IncomingConstants;
use crate::damage::DamageRange;
use crate::rules::{floor_damage, reduction_multiplier, truncate, MIN_DAMAGE};
use serde::{Deserialize, Serialize};

/// Everything applied to a base hit after the defense formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostProcess {
    /// Applicable reductions in percent, already halved against bosses
    pub reductions: Vec<f64>,
    /// Share absorbed, when the absorption mechanic is active
    pub absorption: Option<f64>,
    /// Monster power-up / magic-up multiplier
    pub power_multiplier: f64,
}

impl Default for PostProcess {
    fn default() -> Self {
        PostProcess {
            reductions: Vec::new(),
            absorption: None,
            power_multiplier: 1.0,
        }
    }
}

impl PostProcess {
    /// Combined multiplier of the reduction skills
    pub fn reduction_multiplier(&self) -> f64 {
        reduction_multiplier(self.reductions.iter().copied())
    }

    fn apply(&self, base: i64) -> i64 {
        let reduced = floor_damage(base as f64 * self.reduction_multiplier());
        // Taken from the value before power-up
        let absorbed = self
            .absorption
            .map(|ratio| truncate(reduced as f64 * ratio))
            .unwrap_or(0);
        let powered = truncate(reduced as f64 * self.power_multiplier);
        (powered - absorbed).max(MIN_DAMAGE)
    }
}

/// Run both bounds of `base` through the pipeline
pub fn post_process(base: DamageRange, process: &PostProcess) -> DamageRange {
    base.map(|bound| process.apply(bound))
}

/// Multiplier from a power-up (physical) or magic-up (magic) buff
pub fn power_up_multiplier(boss: bool, enabled: bool, constants: &IncomingConstants) -> f64 {
    match (enabled, boss) {
        (false, _) => 1.0,
        (true, true) => constants.boss_power_up,
        (true, false) => constants.power_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reductions_stack_multiplicatively() {
        let process = PostProcess {
            reductions: vec![20.0, 10.0],
            ..Default::default()
        };
        assert!((process.reduction_multiplier() - 0.72).abs() < 1e-12);
        assert_eq!(post_process(DamageRange::new(1000, 2000), &process), DamageRange::new(720, 1440));
    }

    #[test]
    fn test_absorption_before_power_up() {
        let process = PostProcess {
            reductions: vec![],
            absorption: Some(0.5),
            power_multiplier: 1.3,
        };
        // reduced 1000, absorbed 500, powered 1300 → 800
        let range = post_process(DamageRange::new(1000, 1000), &process);
        assert_eq!(range.min, 800);
    }

    #[test]
    fn test_final_at_least_one() {
        let process = PostProcess {
            reductions: vec![100.0],
            absorption: Some(0.5),
            power_multiplier: 1.0,
        };
        assert_eq!(post_process(DamageRange::new(1, 9999), &process), DamageRange::new(1, 1));
    }

    #[test]
    fn test_power_up_multiplier() {
        let constants = IncomingConstants::default();
        assert!((power_up_multiplier(true, true, &constants) - 1.3).abs() < f64::EPSILON);
        assert!((power_up_multiplier(false, true, &constants) - 1.15).abs() < f64::EPSILON);
        assert!((power_up_multiplier(true, false, &constants) - 1.0).abs() < f64::EPSILON);
    }
}
