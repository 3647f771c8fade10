//! Property tests for the calculators

use build_core::character::{ActiveReduction, CharacterSnapshot, StatsSummary};
use build_core::combat::{accuracy_needed, hit_rate, HitFormula};
use build_core::config::{tables, WeaponConstant};
use build_core::damage::calculate_outgoing_damage;
use build_core::defense::{
    magic_damage, magic_evasion_rate, physical_damage, physical_evasion_rate, post_process,
    DefenderStats, PostProcess,
};
use build_core::derived::calculate_final_stats;
use build_core::types::{DamageTag, DefenseProfile, Job, WeaponType};
use build_core::{calculate_report, DamageRange, MonsterSnapshot};
use proptest::prelude::*;

fn job_strategy() -> impl Strategy<Value = Job> {
    prop::sample::select(Job::all().to_vec())
}

fn weapon_strategy() -> impl Strategy<Value = Option<WeaponType>> {
    prop::option::of(prop::sample::select(WeaponType::all().to_vec()))
}

fn summary_strategy() -> impl Strategy<Value = StatsSummary> {
    (0..200i32, 0..50i32, 0..50i32, 0..50i32, 0..50i32, 0..300i32, 0..300i32).prop_map(
        |(attack, str, dex, int, luk, pdef, mdef)| StatsSummary {
            attack,
            str,
            dex,
            int,
            luk,
            mad: attack,
            pdef,
            mdef,
            acc: dex,
            eva: luk,
            ..Default::default()
        },
    )
}

prop_compose! {
    fn snapshot_strategy()(
        level in 1u32..=200,
        job in job_strategy(),
        weapon in weapon_strategy(),
        pure in (4i32..60, 4i32..60, 4i32..60, 4i32..60),
        equipment in summary_strategy(),
        buffs in (0i32..60, 0i32..60, 0i32..20),
        mastery in 10u32..=90,
        self_buff in (any::<bool>(), 0u32..=30),
        echo in any::<bool>(),
    ) -> CharacterSnapshot {
        CharacterSnapshot {
            level,
            job,
            weapon,
            pure_str: pure.0,
            pure_dex: pure.1,
            pure_int: pure.2,
            pure_luk: pure.3,
            equipment,
            buff1_value: buffs.0,
            buff2_value: buffs.1,
            mastery_percent: mastery,
            mastery_flat_attack: buffs.2,
            self_buff_enabled: self_buff.0,
            self_buff_level: self_buff.1,
            echo,
            base_hp: 1000,
            base_mp: 500,
            ..Default::default()
        }
    }
}

prop_compose! {
    fn monster_strategy()(
        level in 1u32..=200,
        pad in 0i32..3000,
        mad in 0i32..3000,
        acc in 0i32..400,
        eva in 0i32..100,
        boss in any::<bool>(),
        power_up in any::<bool>(),
        magic_up in any::<bool>(),
    ) -> MonsterSnapshot {
        MonsterSnapshot {
            level,
            pad,
            mad,
            acc,
            eva,
            max_hp: 100_000,
            boss,
            power_up,
            magic_up,
            ..Default::default()
        }
    }
}

fn defender_strategy() -> impl Strategy<Value = DefenderStats> {
    (
        1u32..=200,
        0i32..5000,
        0i32..5000,
        0i32..2000,
        (4i32..1000, 4i32..1000, 4i32..1000, 4i32..1000),
        any::<bool>(),
    )
        .prop_map(|(level, pdef, mdef, standard_defense, stats, warrior)| DefenderStats {
            level,
            profile: if warrior {
                DefenseProfile::Warrior
            } else {
                DefenseProfile::Standard
            },
            pdef,
            mdef,
            standard_defense,
            magic_defense_factor: if warrior { 1.0 } else { 1.2 },
            str: stats.0,
            dex: stats.1,
            int: stats.2,
            luk: stats.3,
        })
}

proptest! {
    /// Equipment and buff bonuses never push a total below its pure value
    #[test]
    fn prop_totals_at_least_pure(snapshot in snapshot_strategy()) {
        let stats = calculate_final_stats(&snapshot, tables());
        // Overspent allocations leave a negative main stat; not a valid build
        prop_assume!(stats.breakdown.iter().all(|(_, b)| b.pure >= 0));
        for (stat, breakdown) in &stats.breakdown {
            prop_assert!(stats.total(*stat) >= breakdown.pure);
        }
    }

    /// Outgoing min never exceeds max for valid constants
    #[test]
    fn prop_outgoing_min_le_max(
        min_c in 1.0f64..6.0,
        spread in 0.0f64..2.0,
        attack in 0i32..2000,
        main in 0i32..2000,
        sub in 0i32..1000,
        mastery in 10u32..=90,
    ) {
        let constant = WeaponConstant { min: min_c, max: min_c + spread };
        let range = calculate_outgoing_damage(Some(constant), attack, main, sub, mastery);
        prop_assert!(range.min <= range.max);
        prop_assert!(range.min >= 0);
    }

    /// Incoming damage is always at least 1, whatever the defense
    #[test]
    fn prop_incoming_at_least_one(
        defender in defender_strategy(),
        attack in 0i32..5000,
        monster_level in 1u32..=200,
    ) {
        let physical = physical_damage(attack, monster_level, &defender);
        let magic = magic_damage(attack, &defender);
        prop_assert!(physical.min >= 1 && physical.max >= 1);
        prop_assert!(magic.min >= 1 && magic.max >= 1);
    }

    /// The post-processing pipeline keeps every bound at 1 or more
    #[test]
    fn prop_pipeline_at_least_one(
        min in 1i64..100_000,
        extra in 0i64..100_000,
        reductions in prop::collection::vec(0.0f64..=100.0, 0..4),
        absorption in any::<bool>(),
        power in prop::sample::select(vec![1.0, 1.15, 1.3]),
    ) {
        let process = PostProcess {
            reductions,
            absorption: absorption.then_some(0.5),
            power_multiplier: power,
        };
        let range = post_process(DamageRange::new(min, min + extra), &process);
        prop_assert!(range.min >= 1);
        prop_assert!(range.min <= range.max);
    }

    /// Evasion stays within the job's floor and ceiling
    #[test]
    fn prop_evasion_within_bounds(
        eva in -100i32..2000,
        monster_acc in -100i32..2000,
        job in job_strategy(),
    ) {
        let bounds = tables().constants.evasion.bounds(job);
        for rate in [
            physical_evasion_rate(eva, monster_acc, bounds),
            magic_evasion_rate(eva, monster_acc, bounds),
        ] {
            prop_assert!(rate >= bounds.0 && rate <= bounds.1);
        }
    }

    /// Hit rate is a percentage and the inverse actually reaches 100
    #[test]
    fn prop_hit_rate_and_inverse(
        acc in 0i32..2000,
        level in 1u32..=200,
        monster_eva in 1i32..500,
        monster_level in 1u32..=200,
        magic in any::<bool>(),
    ) {
        let formula = if magic { HitFormula::Magic } else { HitFormula::Physical };
        let rate = hit_rate(formula, acc, level, monster_eva, monster_level);
        prop_assert!((0.0..=100.0).contains(&rate));

        if let Some(needed) = accuracy_needed(formula, level, monster_eva, monster_level) {
            let at_needed = hit_rate(formula, needed, level, monster_eva, monster_level);
            prop_assert!((at_needed - 100.0).abs() < 1e-9);
        }
    }

    /// Same snapshot in, same report out
    #[test]
    fn prop_idempotent(snapshot in snapshot_strategy(), monster in monster_strategy()) {
        let first = calculate_report(&snapshot, Some(&monster), tables());
        let second = calculate_report(&snapshot, Some(&monster), tables());
        prop_assert_eq!(first, second);
    }

    /// Reductions never increase damage
    #[test]
    fn prop_reduction_never_increases(
        base in 1i64..50_000,
        percent in 0.0f64..=100.0,
        boss in any::<bool>(),
    ) {
        let snapshot = CharacterSnapshot {
            active_reductions: vec![ActiveReduction {
                name: "guard".to_string(),
                percent,
                applies_to: vec![DamageTag::Touch],
                halved_vs_boss: true,
            }],
            ..Default::default()
        };
        let process = PostProcess {
            reductions: snapshot.reductions_for(DamageTag::Touch, boss),
            ..Default::default()
        };
        let range = post_process(DamageRange::new(base, base), &process);
        prop_assert!(range.max <= base);
    }
}
