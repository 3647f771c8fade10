//! Prelude module for convenient imports
//!
//! ```rust
//! use build_core::prelude::*;
//! ```

// Build state
pub use crate::character::{
    AttackBuff, BuffState, CharacterSnapshot, CharacterState, Item, Mastery, SkillKind,
    StatsSummary,
};
pub use crate::types::{AttackKind, DamageTag, Element, EquipmentSlot, Job, PrimaryStat, WeaponType};

// Calculators
pub use crate::derived::{calculate_final_stats, FinalStats};
pub use crate::damage::{calculate_outgoing_damage, hits_to_kill, DamageRange};
pub use crate::combat::{calculate_rates, resolve_incoming};
pub use crate::report::{calculate_build, BuildReport};

// Targets
pub use crate::monster::{MonsterSnapshot, MonsterState};

// Config
pub use crate::config::{tables, GameTables};
