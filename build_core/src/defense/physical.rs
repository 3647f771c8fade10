//! Physical and touch damage taken

use super::constants::{DEFENSE_COEFFICIENT_OFFSET, OUTLEVELED_PENALTY, PHYSICAL_SPREAD};
use super::DefenderStats;
use crate::damage::DamageRange;
use crate::rules::floor_damage;
use crate::types::DefenseProfile;

/// Stat-weighted constant term C
pub fn constant_term(profile: DefenseProfile, str: i32, dex: i32, int: i32, luk: i32) -> f64 {
    let (str_div, dex_div) = match profile {
        DefenseProfile::Warrior => (2800.0, 3200.0),
        DefenseProfile::Standard => (2000.0, 2800.0),
    };
    str as f64 / str_div + dex as f64 / dex_div + int as f64 / 7200.0 + luk as f64 / 3200.0
}

/// Flat amount shaved off a physical hit
fn mitigation(defender: &DefenderStats, monster_level: u32) -> f64 {
    let c = constant_term(
        defender.profile,
        defender.str,
        defender.dex,
        defender.int,
        defender.luk,
    );
    let a = c + DEFENSE_COEFFICIENT_OFFSET;
    let level = defender.level as f64;

    let b = if defender.pdef >= defender.standard_defense {
        c * 28.0 / 45.0 + level * 7.0 / 13000.0 + 0.196
    } else {
        let d = if defender.level >= monster_level {
            13.0 / (13.0 + level - monster_level as f64)
        } else {
            OUTLEVELED_PENALTY
        };
        d * (c + level / 550.0 + DEFENSE_COEFFICIENT_OFFSET)
    };

    let pdef = defender.pdef as f64;
    pdef * a + (pdef - defender.standard_defense as f64) * b
}

/// Base damage range of a physical or touch hit
pub fn physical_damage(monster_attack: i32, monster_level: u32, defender: &DefenderStats) -> DamageRange {
    let attack = monster_attack as f64;
    let reduction = mitigation(defender, monster_level);
    let (min_spread, max_spread) = PHYSICAL_SPREAD;

    DamageRange::new(
        floor_damage(attack * attack * min_spread - reduction),
        floor_damage(attack * attack * max_spread - reduction),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defender(pdef: i32, standard_defense: i32) -> DefenderStats {
        DefenderStats {
            level: 100,
            profile: DefenseProfile::Standard,
            pdef,
            mdef: 0,
            standard_defense,
            magic_defense_factor: 1.0,
            str: 4,
            dex: 60,
            int: 4,
            luk: 400,
        }
    }

    #[test]
    fn test_constant_term_profiles() {
        let warrior = constant_term(DefenseProfile::Warrior, 2800, 3200, 0, 0);
        assert!((warrior - 2.0).abs() < 1e-12);
        let standard = constant_term(DefenseProfile::Standard, 2000, 2800, 7200, 3200);
        assert!((standard - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_defense_is_raw_spread() {
        let range = physical_damage(1000, 100, &defender(0, 0));
        // 1000² × 0.008, 1000² × 0.0085
        assert_eq!(range.min, 8000);
        assert_eq!(range.max, 8500);
    }

    #[test]
    fn test_above_standard_defense() {
        let stats = defender(400, 336);
        let c = 4.0 / 2000.0 + 60.0 / 2800.0 + 4.0 / 7200.0 + 400.0 / 3200.0;
        let a = c + 0.28;
        let b = c * 28.0 / 45.0 + 100.0 * 7.0 / 13000.0 + 0.196;
        let reduction = 400.0 * a + 64.0 * b;

        let range = physical_damage(500, 90, &stats);
        assert_eq!(range.min, (500.0f64 * 500.0 * 0.008 - reduction) as i64);
        assert_eq!(range.max, (500.0f64 * 500.0 * 0.0085 - reduction) as i64);
    }

    #[test]
    fn test_below_standard_monster_outlevels() {
        let stats = defender(100, 336);
        let c = 4.0 / 2000.0 + 60.0 / 2800.0 + 4.0 / 7200.0 + 400.0 / 3200.0;
        let a = c + 0.28;
        let b = 1.3 * (c + 100.0 / 550.0 + 0.28);
        let reduction = 100.0 * a + (100.0 - 336.0) * b;

        let range = physical_damage(500, 120, &stats);
        assert_eq!(range.min, (500.0f64 * 500.0 * 0.008 - reduction) as i64);
    }

    #[test]
    fn test_below_standard_character_outlevels() {
        let stats = defender(100, 336);
        let c = 4.0 / 2000.0 + 60.0 / 2800.0 + 4.0 / 7200.0 + 400.0 / 3200.0;
        let a = c + 0.28;
        let d = 13.0 / (13.0 + 100.0 - 80.0);
        let b = d * (c + 100.0 / 550.0 + 0.28);
        let reduction = 100.0 * a + (100.0 - 336.0) * b;

        let range = physical_damage(500, 80, &stats);
        assert_eq!(range.max, (500.0f64 * 500.0 * 0.0085 - reduction) as i64);
    }

    #[test]
    fn test_massive_defense_still_hits_for_one() {
        let range = physical_damage(10, 1, &defender(5000, 100));
        assert_eq!(range, DamageRange::new(1, 1));
    }
}
