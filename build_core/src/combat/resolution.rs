//! Resolution - Run a monster's attacks and rates against a character

use super::accuracy::{accuracy_needed, hit_rate, HitFormula};
use super::result::{IncomingDamageReport, IncomingEntry, RateReport};
use crate::character::CharacterSnapshot;
use crate::config::GameTables;
use crate::damage::{hits_to_die, DamageRange};
use crate::defense::{
    combined_evasion_rate, magic_damage, magic_evasion_rate, physical_damage,
    physical_evasion_rate, post_process, power_up_multiplier, DefenderStats, PostProcess,
};
use crate::derived::FinalStats;
use crate::monster::MonsterSnapshot;
use crate::types::{AttackKind, DamageTag};

/// Which hit formula a job attacks with
pub fn hit_formula(snapshot: &CharacterSnapshot) -> HitFormula {
    if snapshot.job.is_magician() {
        HitFormula::Magic
    } else {
        HitFormula::Physical
    }
}

/// Damage of touch plus every monster skill, after the full pipeline
pub fn resolve_incoming(
    snapshot: &CharacterSnapshot,
    stats: &FinalStats,
    monster: &MonsterSnapshot,
    tables: &GameTables,
) -> IncomingDamageReport {
    let defender = DefenderStats::new(snapshot, stats, tables);
    let mut report = IncomingDamageReport::default();

    report.entries.push(resolve_one(
        "Touch",
        DamageTag::Touch,
        AttackKind::Physical,
        monster.pad,
        snapshot,
        stats,
        &defender,
        monster,
        tables,
    ));

    for attack in &monster.attacks {
        report.entries.push(resolve_one(
            &attack.name,
            attack.tag(),
            attack.kind,
            monster.attack_value(attack),
            snapshot,
            stats,
            &defender,
            monster,
            tables,
        ));
    }

    tracing::debug!(
        entries = report.entries.len(),
        monster_level = monster.level,
        boss = monster.boss,
        "incoming damage resolved"
    );
    report
}

#[allow(clippy::too_many_arguments)]
fn resolve_one(
    name: &str,
    tag: DamageTag,
    kind: AttackKind,
    attack: i32,
    snapshot: &CharacterSnapshot,
    stats: &FinalStats,
    defender: &DefenderStats,
    monster: &MonsterSnapshot,
    tables: &GameTables,
) -> IncomingEntry {
    let base: DamageRange = match kind {
        AttackKind::Physical => physical_damage(attack, monster.level, defender),
        AttackKind::Magic => magic_damage(attack, defender),
    };

    let incoming = &tables.constants.incoming;
    let process = PostProcess {
        reductions: snapshot.reductions_for(tag, monster.boss),
        absorption: snapshot.absorption.then_some(incoming.absorption_ratio),
        power_multiplier: power_up_multiplier(monster.boss, monster.powered(kind), incoming),
    };
    let final_range = post_process(base, &process);

    IncomingEntry {
        name: name.to_string(),
        tag,
        attack,
        base,
        final_range,
        reduction_multiplier: process.reduction_multiplier(),
        power_multiplier: process.power_multiplier,
        hits_to_die: hits_to_die(stats.hp as i64, final_range),
    }
}

/// Hit rate against the monster and evasion rates against its attacks
pub fn calculate_rates(
    snapshot: &CharacterSnapshot,
    stats: &FinalStats,
    monster: &MonsterSnapshot,
    tables: &GameTables,
) -> RateReport {
    let formula = hit_formula(snapshot);
    let accuracy = match formula {
        HitFormula::Magic => stats.magic_accuracy,
        HitFormula::Physical => stats.acc,
    };
    let bounds = tables.constants.evasion.bounds(snapshot.job);

    let physical_evasion = physical_evasion_rate(stats.eva, monster.acc, bounds);
    let magic_evasion = magic_evasion_rate(stats.eva, monster.acc, bounds);

    RateReport {
        hit_rate: hit_rate(formula, accuracy, snapshot.level, monster.eva, monster.level),
        accuracy_needed: accuracy_needed(formula, snapshot.level, monster.eva, monster.level),
        physical_evasion,
        magic_evasion,
        physical_evasion_total: combined_evasion_rate(
            physical_evasion,
            snapshot.bonus_evasion(false),
        ),
        magic_evasion_total: combined_evasion_rate(magic_evasion, snapshot.bonus_evasion(true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{ActiveEvasion, ActiveReduction, StatsSummary};
    use crate::config::tables;
    use crate::derived::calculate_final_stats;
    use crate::monster::MonsterAttack;
    use crate::types::{Element, Job, WeaponType};

    fn magician() -> CharacterSnapshot {
        CharacterSnapshot {
            level: 100,
            job: Job::Magician,
            weapon: Some(WeaponType::Staff),
            pure_str: 4,
            pure_dex: 4,
            pure_int: 4,
            pure_luk: 30,
            equipment: StatsSummary {
                mdef: 50,
                pdef: 40,
                ..Default::default()
            },
            base_hp: 2000,
            ..Default::default()
        }
    }

    fn monster() -> MonsterSnapshot {
        MonsterSnapshot {
            level: 90,
            pad: 600,
            mad: 480,
            acc: 120,
            eva: 30,
            max_hp: 50_000,
            attacks: vec![
                MonsterAttack {
                    name: "Fire Blast".to_string(),
                    kind: AttackKind::Magic,
                    element: Some(Element::Fire),
                    attack: None,
                },
                MonsterAttack {
                    name: "Stomp".to_string(),
                    kind: AttackKind::Physical,
                    element: None,
                    attack: Some(800),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_touch_plus_every_skill() {
        let snapshot = magician();
        let stats = calculate_final_stats(&snapshot, tables());
        let report = resolve_incoming(&snapshot, &stats, &monster(), tables());

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.touch().map(|e| e.attack), Some(600));
        assert_eq!(report.entries[1].tag, DamageTag::Fire);
        assert_eq!(report.entries[2].attack, 800);
        assert_eq!(report.worst().map(|e| e.name.as_str()), Some("Stomp"));
        for entry in &report.entries {
            assert!(entry.final_range.min >= 1);
            assert!(entry.final_range.min <= entry.final_range.max);
        }
    }

    #[test]
    fn test_reduction_only_hits_matching_tag() {
        let mut snapshot = magician();
        snapshot.active_reductions = vec![ActiveReduction {
            name: "Fire resistance".to_string(),
            percent: 50.0,
            applies_to: vec![DamageTag::Fire],
            halved_vs_boss: false,
        }];
        let stats = calculate_final_stats(&snapshot, tables());
        let report = resolve_incoming(&snapshot, &stats, &monster(), tables());

        let fire = &report.entries[1];
        assert!((fire.reduction_multiplier - 0.5).abs() < f64::EPSILON);
        assert_eq!(fire.final_range.max, fire.base.max / 2);
        let touch = &report.entries[0];
        assert_eq!(touch.final_range, touch.base);
    }

    #[test]
    fn test_boss_power_up() {
        let snapshot = magician();
        let stats = calculate_final_stats(&snapshot, tables());
        let mut boss = monster();
        boss.boss = true;
        boss.power_up = true;
        let report = resolve_incoming(&snapshot, &stats, &boss, tables());

        assert!((report.entries[0].power_multiplier - 1.3).abs() < f64::EPSILON);
        // Magic-up is off, so the magic skill is untouched
        assert!((report.entries[1].power_multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rates_zero_accuracy_monster() {
        let snapshot = magician();
        let stats = calculate_final_stats(&snapshot, tables());
        let mut blind = monster();
        blind.acc = 0;
        let rates = calculate_rates(&snapshot, &stats, &blind, tables());

        assert!((rates.physical_evasion - 80.0).abs() < f64::EPSILON);
        assert!((rates.magic_evasion - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bonus_evasion_raises_total() {
        let mut snapshot = magician();
        snapshot.job = Job::Thief;
        snapshot.bonus_evasion = vec![ActiveEvasion {
            name: "Shifter".to_string(),
            chance: 30.0,
            physical: true,
            magic: true,
        }];
        let stats = calculate_final_stats(&snapshot, tables());
        let rates = calculate_rates(&snapshot, &stats, &monster(), tables());

        assert!(rates.physical_evasion >= 5.0 && rates.physical_evasion <= 95.0);
        assert!(rates.physical_evasion_total > rates.physical_evasion);
        let expected = 100.0 - (100.0 - rates.physical_evasion) * 0.7;
        assert!((rates.physical_evasion_total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_magician_uses_magic_accuracy() {
        let snapshot = magician();
        let stats = calculate_final_stats(&snapshot, tables());
        let rates = calculate_rates(&snapshot, &stats, &monster(), tables());
        let expected = hit_rate(HitFormula::Magic, stats.magic_accuracy, 100, 30, 90);
        assert!((rates.hit_rate - expected).abs() < f64::EPSILON);
    }
}
