//! FinalStats - What the stat window shows for a snapshot

use crate::character::CharacterSnapshot;
use crate::config::GameTables;
use crate::derived::{StatAccumulator, StatBreakdown};
use crate::rules::truncate;
use crate::source::{accumulate, BuffSource, GearSource, PassiveSource, PureStatsSource, StatSource};
use crate::types::PrimaryStat;
use serde::{Deserialize, Serialize};

/// Derived totals for one character
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinalStats {
    pub total_str: i32,
    pub total_dex: i32,
    pub total_int: i32,
    pub total_luk: i32,
    pub total_attack: i32,
    pub total_mad: i32,
    /// Main stat role, if the job has one
    pub main_role: Option<PrimaryStat>,
    pub sub_role: Option<PrimaryStat>,
    /// Total of the main stat, 0 without a job
    pub main_stat: i32,
    /// Total of the sub stat, 0 without a job
    pub sub_stat: i32,
    pub magic_accuracy: i32,
    pub acc: i32,
    pub eva: i32,
    pub pdef: i32,
    pub mdef: i32,
    pub speed: i32,
    pub jump: i32,
    pub hp: i32,
    pub mp: i32,
    /// Per-stat origin of the four primary totals
    pub breakdown: Vec<(PrimaryStat, StatBreakdown)>,
}

impl FinalStats {
    pub fn total(&self, stat: PrimaryStat) -> i32 {
        match stat {
            PrimaryStat::Str => self.total_str,
            PrimaryStat::Dex => self.total_dex,
            PrimaryStat::Int => self.total_int,
            PrimaryStat::Luk => self.total_luk,
        }
    }

    pub fn breakdown_of(&self, stat: PrimaryStat) -> StatBreakdown {
        self.breakdown
            .iter()
            .find(|(s, _)| *s == stat)
            .map(|(_, b)| *b)
            .unwrap_or_default()
    }
}

/// The stat sources a snapshot contributes, in no particular order
pub fn sources_for(snapshot: &CharacterSnapshot, tables: &GameTables) -> Vec<Box<dyn StatSource>> {
    let is_magician = snapshot.job.is_magician();
    let self_buff_percent = if snapshot.self_buff_enabled {
        tables.self_buff_percent(snapshot.self_buff_level)
    } else {
        0
    };
    let mastery_attack = if is_magician {
        0
    } else {
        snapshot.mastery_flat_attack
    };

    vec![
        Box::new(PureStatsSource {
            allocated: [
                (PrimaryStat::Str, snapshot.pure_str),
                (PrimaryStat::Dex, snapshot.pure_dex),
                (PrimaryStat::Int, snapshot.pure_int),
                (PrimaryStat::Luk, snapshot.pure_luk),
            ],
            main_stat: snapshot.job.main_stat(snapshot.weapon),
            total_points: tables.constants.points.total_points(snapshot.level),
            base_hp: snapshot.base_hp,
            base_mp: snapshot.base_mp,
        }),
        Box::new(GearSource::new(snapshot.equipment)),
        Box::new(PassiveSource::new(snapshot.passive)),
        Box::new(BuffSource {
            self_buff_percent,
            buff_pool: snapshot.buff1_value + snapshot.buff2_value + mastery_attack,
            feeds_magic: is_magician,
            echo: snapshot
                .echo
                .then_some(tables.constants.buffs.echo_multiplier),
            defensive: snapshot.buff,
        }),
    ]
}

/// Derive every stat-window value from a snapshot
pub fn calculate_final_stats(snapshot: &CharacterSnapshot, tables: &GameTables) -> FinalStats {
    let stats = accumulate(&sources_for(snapshot, tables));
    let final_stats = finalize(snapshot, &stats, tables);
    tracing::debug!(
        level = snapshot.level,
        job = snapshot.job.name(),
        attack = final_stats.total_attack,
        mad = final_stats.total_mad,
        "final stats derived"
    );
    final_stats
}

fn finalize(snapshot: &CharacterSnapshot, stats: &StatAccumulator, tables: &GameTables) -> FinalStats {
    let total_str = stats.str.total();
    let total_dex = stats.dex.total();
    let total_int = stats.int.total();
    let total_luk = stats.luk.total();
    let multiplier = stats.power_multiplier();

    // INT feeds magic power 1:1 for everyone; the buff pool went wherever
    // the job sends it
    let total_attack = truncate(stats.attack_flat as f64 * multiplier) as i32;
    let total_mad = truncate((stats.magic_flat + total_int) as f64 * multiplier) as i32;

    let magic_accuracy = if snapshot.job.is_magician() {
        total_int / 10 + total_luk / 10 + stats.macc_flat
    } else {
        0
    };

    let roles = snapshot.job.stat_roles(snapshot.weapon);
    let total_of = |stat: PrimaryStat| stats.primary(stat).total();
    let (main_stat, sub_stat) = roles
        .map(|(main, sub)| (total_of(main), total_of(sub)))
        .unwrap_or((0, 0));

    let movement = &tables.constants.movement;

    FinalStats {
        total_str,
        total_dex,
        total_int,
        total_luk,
        total_attack,
        total_mad,
        main_role: roles.map(|(main, _)| main),
        sub_role: roles.map(|(_, sub)| sub),
        main_stat,
        sub_stat,
        magic_accuracy,
        acc: truncate(total_dex as f64 * 0.8) as i32
            + truncate(total_luk as f64 * 0.5) as i32
            + stats.acc_flat,
        eva: truncate(total_dex as f64 * 0.25) as i32
            + truncate(total_luk as f64 * 0.5) as i32
            + stats.eva_flat,
        pdef: stats.pdef_flat,
        mdef: stats.mdef_flat,
        speed: (100 + stats.speed_flat).min(movement.speed_cap),
        jump: (100 + stats.jump_flat).min(movement.jump_cap),
        hp: stats.hp_flat,
        mp: stats.mp_flat,
        breakdown: PrimaryStat::all()
            .iter()
            .map(|&stat| (stat, *stats.primary(stat)))
            .collect(),
    }
}
