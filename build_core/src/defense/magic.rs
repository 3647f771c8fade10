//! Magic and elemental damage taken

use super::constants::MAGIC_SPREAD;
use super::DefenderStats;
use crate::damage::DamageRange;
use crate::rules::floor_damage;

/// Flat magic mitigation: `(mdef/4 + str/28 + dex/24 + luk/20) × K`
pub fn magic_defense(defender: &DefenderStats) -> f64 {
    (defender.mdef as f64 / 4.0
        + defender.str as f64 / 28.0
        + defender.dex as f64 / 24.0
        + defender.luk as f64 / 20.0)
        * defender.magic_defense_factor
}

/// Base damage range of a magic hit
pub fn magic_damage(monster_magic_attack: i32, defender: &DefenderStats) -> DamageRange {
    let attack = monster_magic_attack as f64;
    let defense = magic_defense(defender);
    let (min_spread, max_spread) = MAGIC_SPREAD;

    DamageRange::new(
        floor_damage(attack * attack * min_spread - defense),
        floor_damage(attack * attack * max_spread - defense),
    )
}
