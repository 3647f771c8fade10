//! Outgoing damage - The stat-window damage range

use super::DamageRange;
use crate::config::WeaponConstant;
use crate::rules::truncate;

/// Min/max damage the character deals
///
/// Mastery only gates the minimum roll; the maximum always assumes the full
/// weapon constant. No weapon constant or zero attack yields a zero range.
pub fn calculate_outgoing_damage(
    constant: Option<WeaponConstant>,
    stat_attack: i32,
    main_stat: i32,
    sub_stat: i32,
    mastery_percent: u32,
) -> DamageRange {
    let Some(constant) = constant else {
        return DamageRange::ZERO;
    };
    if stat_attack == 0 {
        return DamageRange::ZERO;
    }

    let main = main_stat as f64;
    let sub = sub_stat as f64;
    let attack = stat_attack as f64;
    let mastery = mastery_percent as f64 / 100.0;

    let min = truncate((main * constant.min * 0.9 * mastery + sub) * attack / 100.0);
    let max = truncate((main * constant.max + sub) * attack / 100.0);

    tracing::debug!(
        main_stat,
        sub_stat,
        stat_attack,
        mastery_percent,
        min,
        max,
        "outgoing damage"
    );
    DamageRange::new(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWORD: WeaponConstant = WeaponConstant { min: 4.0, max: 4.0 };

    #[test]
    fn test_sword_range() {
        let range = calculate_outgoing_damage(Some(SWORD), 120, 204, 40, 60);
        // ((204 × 4 × 0.9 × 0.6) + 40) × 1.2 = 576.768
        assert_eq!(range.min, 576);
        // ((204 × 4) + 40) × 1.2 = 1027.2
        assert_eq!(range.max, 1027);
    }

    #[test]
    fn test_no_weapon() {
        assert_eq!(calculate_outgoing_damage(None, 120, 204, 40, 60), DamageRange::ZERO);
    }

    #[test]
    fn test_zero_attack() {
        assert_eq!(calculate_outgoing_damage(Some(SWORD), 0, 204, 40, 60), DamageRange::ZERO);
    }

    #[test]
    fn test_asymmetric_constant() {
        let spear = WeaponConstant { min: 3.0, max: 5.0 };
        let range = calculate_outgoing_damage(Some(spear), 100, 300, 50, 90);
        // (300 × 3 × 0.9 × 0.9 + 50) = 779
        assert_eq!(range.min, 779);
        assert_eq!(range.max, 1550);
    }
}
