//! Character - Raw build state and the snapshot handed to calculators

mod buffs;
mod equipment;
mod snapshot;
mod summary;

pub use buffs::{AttackBuff, BuffState, DefensiveBuffs, Mastery, SelfBuff};
pub use equipment::{Equipment, Item};
pub use snapshot::{ActiveEvasion, ActiveReduction, CharacterSnapshot};
pub use summary::StatsSummary;

use crate::config::GameTables;
use crate::types::{EquipmentSlot, Job, PrimaryStat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest supported character level
pub const MAX_LEVEL: u32 = 200;
/// Smallest value a non-main pure stat may hold
pub const MIN_PURE_STAT: i32 = 4;

/// Rejected build edit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    #[error("Level {0} is outside 1..=200")]
    LevelOutOfRange(u32),
    #[error("{} is the main stat and is derived from the level", .0.name())]
    MainStatNotSettable(PrimaryStat),
    #[error("{} cannot go below 4 (got {value})", .stat.name())]
    StatBelowMinimum { stat: PrimaryStat, value: i32 },
    #[error("{item} cannot be worn in the {} slot", .slot.name())]
    WrongSlot { item: String, slot: EquipmentSlot },
    #[error("The {} slot is blocked by a full-body top", .0.name())]
    SlotBlocked(EquipmentSlot),
    #[error("Unknown buff preset: {0}")]
    UnknownPreset(String),
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),
}

/// Which skill table a level belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Passive,
    Reduction,
    Evasion,
}

/// Allocated points, as typed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PureStats {
    pub str: i32,
    pub dex: i32,
    pub int: i32,
    pub luk: i32,
}

impl Default for PureStats {
    fn default() -> Self {
        PureStats {
            str: MIN_PURE_STAT,
            dex: MIN_PURE_STAT,
            int: MIN_PURE_STAT,
            luk: MIN_PURE_STAT,
        }
    }
}

impl PureStats {
    pub fn get(&self, stat: PrimaryStat) -> i32 {
        match stat {
            PrimaryStat::Str => self.str,
            PrimaryStat::Dex => self.dex,
            PrimaryStat::Int => self.int,
            PrimaryStat::Luk => self.luk,
        }
    }

    fn set(&mut self, stat: PrimaryStat, value: i32) {
        match stat {
            PrimaryStat::Str => self.str = value,
            PrimaryStat::Dex => self.dex = value,
            PrimaryStat::Int => self.int = value,
            PrimaryStat::Luk => self.luk = value,
        }
    }
}

/// One character build, mutated through validated setters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    level: u32,
    #[serde(default)]
    job: Job,
    #[serde(default)]
    pure: PureStats,
    #[serde(default)]
    equipment: Equipment,
    #[serde(default)]
    buffs: BuffState,
    #[serde(default)]
    pub base_hp: i32,
    #[serde(default)]
    pub base_mp: i32,
}

impl Default for CharacterState {
    fn default() -> Self {
        CharacterState {
            level: 1,
            job: Job::None,
            pure: PureStats::default(),
            equipment: Equipment::default(),
            buffs: BuffState::default(),
            base_hp: 50,
            base_mp: 5,
        }
    }
}

impl CharacterState {
    pub fn new(level: u32, job: Job) -> Result<Self, BuildError> {
        let mut state = CharacterState {
            job,
            ..Default::default()
        };
        state.set_level(level)?;
        Ok(state)
    }

    // === Accessors ===

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn job(&self) -> Job {
        self.job
    }

    pub fn pure(&self) -> &PureStats {
        &self.pure
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn buffs(&self) -> &BuffState {
        &self.buffs
    }

    /// Mutable buff toggles that need no validation
    pub fn buffs_mut(&mut self) -> &mut BuffState {
        &mut self.buffs
    }

    /// Current main stat, if the job has one
    pub fn main_stat(&self) -> Option<PrimaryStat> {
        self.job.main_stat(self.equipment.weapon_type())
    }

    /// Back-computed value of the main stat: every point not spent elsewhere
    pub fn main_stat_value(&self, tables: &GameTables) -> Option<i32> {
        let main = self.main_stat()?;
        let others: i32 = PrimaryStat::all()
            .iter()
            .filter(|&&s| s != main)
            .map(|&s| self.pure.get(s))
            .sum();
        Some(tables.constants.points.total_points(self.level) - others)
    }

    // === Setters ===

    pub fn set_level(&mut self, level: u32) -> Result<(), BuildError> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return Err(BuildError::LevelOutOfRange(level));
        }
        self.level = level;
        Ok(())
    }

    pub fn set_job(&mut self, job: Job) {
        self.job = job;
    }

    /// Set a non-main pure stat
    pub fn set_pure_stat(&mut self, stat: PrimaryStat, value: i32) -> Result<(), BuildError> {
        if self.main_stat() == Some(stat) {
            return Err(BuildError::MainStatNotSettable(stat));
        }
        if value < MIN_PURE_STAT {
            return Err(BuildError::StatBelowMinimum { stat, value });
        }
        self.pure.set(stat, value);
        Ok(())
    }

    pub fn equip(&mut self, slot: EquipmentSlot, item: Item) -> Result<Vec<Item>, BuildError> {
        self.equipment.equip(slot, item)
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<Item> {
        self.equipment.unequip(slot)
    }

    /// Set attack buff slot 1 or 2; any other slot number selects slot 2
    pub fn set_attack_buff(
        &mut self,
        slot: u8,
        buff: AttackBuff,
        tables: &GameTables,
    ) -> Result<(), BuildError> {
        if let AttackBuff::Preset(id) = &buff {
            if tables.buff_preset(id).is_none() {
                return Err(BuildError::UnknownPreset(id.clone()));
            }
        }
        match slot {
            1 => self.buffs.buff1 = buff,
            _ => self.buffs.buff2 = buff,
        }
        Ok(())
    }

    /// Set a skill level, capped at the skill's maximum. Level 0 unlearns it.
    pub fn set_skill_level(
        &mut self,
        kind: SkillKind,
        id: &str,
        level: u32,
        tables: &GameTables,
    ) -> Result<u32, BuildError> {
        let max_level = match kind {
            SkillKind::Passive => tables.passive(id).map(|s| s.max_level),
            SkillKind::Reduction => tables.reduction_skill(id).map(|s| s.max_level),
            SkillKind::Evasion => tables.evasion_skill(id).map(|s| s.max_level),
        }
        .ok_or_else(|| BuildError::UnknownSkill(id.to_string()))?;

        let level = level.min(max_level);
        let levels = match kind {
            SkillKind::Passive => &mut self.buffs.passives,
            SkillKind::Reduction => &mut self.buffs.reduction_skills,
            SkillKind::Evasion => &mut self.buffs.evasion_skills,
        };
        if level == 0 {
            levels.remove(id);
        } else {
            levels.insert(id.to_string(), level);
        }
        Ok(level)
    }

    pub fn skill_level(&self, kind: SkillKind, id: &str) -> u32 {
        let levels = match kind {
            SkillKind::Passive => &self.buffs.passives,
            SkillKind::Reduction => &self.buffs.reduction_skills,
            SkillKind::Evasion => &self.buffs.evasion_skills,
        };
        levels.get(id).copied().unwrap_or(0)
    }

    // === Snapshot ===

    /// Resolve presets and skill levels into a calculator snapshot
    ///
    /// Skills belonging to another job are kept in the state but left out of
    /// the snapshot.
    pub fn snapshot(&self, tables: &GameTables) -> CharacterSnapshot {
        let is_magician = self.job.is_magician();

        let mut passive = StatsSummary::default();
        for (id, &level) in &self.buffs.passives {
            match tables.passive(id) {
                Some(skill) if skill.job == self.job => {
                    let level = level.min(skill.max_level) as i32;
                    passive.acc += skill.acc_per_level * level;
                    passive.eva += skill.eva_per_level * level;
                    passive.pdef += skill.pdef_per_level * level;
                    passive.mdef += skill.mdef_per_level * level;
                }
                Some(_) => tracing::debug!("passive '{}' belongs to another job", id),
                None => tracing::warn!("unknown passive '{}', ignoring", id),
            }
        }

        let active_reductions = self
            .buffs
            .reduction_skills
            .iter()
            .filter_map(|(id, &level)| match tables.reduction_skill(id) {
                Some(skill) if skill.job == self.job && level > 0 => Some(ActiveReduction {
                    name: skill.name.clone(),
                    percent: skill.reduction_at(level),
                    applies_to: skill.applies_to.clone(),
                    halved_vs_boss: skill.halved_vs_boss,
                }),
                Some(_) => None,
                None => {
                    tracing::warn!("unknown reduction skill '{}', ignoring", id);
                    None
                }
            })
            .collect();

        let bonus_evasion = self
            .buffs
            .evasion_skills
            .iter()
            .filter_map(|(id, &level)| match tables.evasion_skill(id) {
                Some(skill) if skill.job == self.job && level > 0 => Some(ActiveEvasion {
                    name: skill.name.clone(),
                    chance: skill.chance_at(level),
                    physical: skill.physical,
                    magic: skill.magic,
                }),
                Some(_) => None,
                None => {
                    tracing::warn!("unknown evasion skill '{}', ignoring", id);
                    None
                }
            })
            .collect();

        let defensive = &self.buffs.defensive;
        let buff = StatsSummary {
            pdef: defensive.pdef,
            mdef: defensive.mdef,
            acc: defensive.acc,
            eva: defensive.eva,
            speed: defensive.speed,
            jump: defensive.jump,
            ..Default::default()
        };

        CharacterSnapshot {
            level: self.level,
            job: self.job,
            weapon: self.equipment.weapon_type(),
            pure_str: self.pure.str,
            pure_dex: self.pure.dex,
            pure_int: self.pure.int,
            pure_luk: self.pure.luk,
            equipment: self.equipment.aggregate(),
            buff1_value: self.buffs.buff1.resolve(tables, is_magician),
            buff2_value: self.buffs.buff2.resolve(tables, is_magician),
            mastery_percent: self.buffs.mastery.percent(),
            mastery_flat_attack: self.buffs.mastery_flat_attack,
            self_buff_level: self.buffs.self_buff.level,
            self_buff_enabled: self.buffs.self_buff.enabled,
            echo: self.buffs.echo,
            passive,
            buff,
            active_reductions,
            bonus_evasion,
            absorption: self.buffs.absorption,
            base_hp: self.base_hp,
            base_mp: self.base_mp,
        }
    }
}
