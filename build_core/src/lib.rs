//! build_core - Stat derivation and damage formulas for character builds
//!
//! This library provides:
//! - CharacterState / CharacterSnapshot: raw build state and calculator input
//! - FinalStats: totals, attack and magic power, accuracy, defense
//! - Outgoing damage: the stat-window min/max range
//! - Incoming damage: physical and magic formulas plus the reduction pipeline
//! - Hit and evasion rates against a monster
//!
//! Every calculator is a pure function of its snapshot and the static tables.

pub mod character;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod derived;
pub mod monster;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod source;
pub mod types;

// Re-export core types for convenience
pub use character::{
    AttackBuff, BuffState, BuildError, CharacterSnapshot, CharacterState, Equipment, Item,
    Mastery, SkillKind, StatsSummary,
};
pub use combat::{IncomingDamageReport, IncomingEntry, RateReport};
pub use config::{tables, ConfigError, GameTables};
pub use damage::{DamageRange, HitCount};
pub use derived::{calculate_final_stats, FinalStats};
pub use monster::{MonsterAttack, MonsterSnapshot, MonsterState};
pub use report::{calculate_build, calculate_report, BuildReport, TargetReport};
pub use types::{AttackKind, DamageTag, Element, EquipmentSlot, Job, PrimaryStat, WeaponType};
