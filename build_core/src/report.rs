//! BuildReport - Every calculator run over one character and target

use crate::character::{CharacterSnapshot, CharacterState};
use crate::combat::{calculate_rates, resolve_incoming, IncomingDamageReport, RateReport};
use crate::config::GameTables;
use crate::damage::{calculate_outgoing_damage, hits_to_kill, DamageRange, HitCount};
use crate::derived::{calculate_final_stats, FinalStats};
use crate::monster::MonsterSnapshot;
use serde::{Deserialize, Serialize};

/// Monster-dependent part of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetReport {
    pub incoming: IncomingDamageReport,
    pub rates: RateReport,
    pub hits_to_kill: Option<HitCount>,
}

/// Everything shown for a build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub snapshot: CharacterSnapshot,
    pub stats: FinalStats,
    pub outgoing: DamageRange,
    /// Absent when no monster is selected
    pub target: Option<TargetReport>,
}

/// Derive stats, outgoing damage and (with a monster) incoming damage and rates
pub fn calculate_report(
    snapshot: &CharacterSnapshot,
    monster: Option<&MonsterSnapshot>,
    tables: &GameTables,
) -> BuildReport {
    let stats = calculate_final_stats(snapshot, tables);
    let outgoing = calculate_outgoing_damage(
        tables.weapon_constant(snapshot.weapon),
        stats.total_attack,
        stats.main_stat,
        stats.sub_stat,
        snapshot.mastery_percent,
    );

    let target = monster.map(|monster| TargetReport {
        incoming: resolve_incoming(snapshot, &stats, monster, tables),
        rates: calculate_rates(snapshot, &stats, monster, tables),
        hits_to_kill: hits_to_kill(outgoing, monster.max_hp),
    });

    BuildReport {
        snapshot: snapshot.clone(),
        stats,
        outgoing,
        target,
    }
}

/// Snapshot `character` and build its report
pub fn calculate_build(
    character: &CharacterState,
    monster: Option<&MonsterSnapshot>,
    tables: &GameTables,
) -> BuildReport {
    calculate_report(&character.snapshot(tables), monster, tables)
}
