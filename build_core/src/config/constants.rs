//! Game constants configuration

use serde::{Deserialize, Serialize};

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub points: PointConstants,
    #[serde(default)]
    pub buffs: BuffConstants,
    #[serde(default)]
    pub incoming: IncomingConstants,
    #[serde(default)]
    pub evasion: EvasionConstants,
    #[serde(default)]
    pub movement: MovementConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointConstants {
    /// Points available at level 0
    #[serde(default = "default_base_points")]
    pub base: i32,
    /// Points granted per level
    #[serde(default = "default_points_per_level")]
    pub per_level: i32,
    /// Levels at which a one-off bonus is granted
    #[serde(default = "default_bonus_levels")]
    pub bonus_levels: Vec<u32>,
    /// Size of each one-off bonus
    #[serde(default = "default_bonus_points")]
    pub bonus_points: i32,
}

impl Default for PointConstants {
    fn default() -> Self {
        PointConstants {
            base: default_base_points(),
            per_level: default_points_per_level(),
            bonus_levels: default_bonus_levels(),
            bonus_points: default_bonus_points(),
        }
    }
}

impl PointConstants {
    /// Total allocable points at `level`
    pub fn total_points(&self, level: u32) -> i32 {
        let bonuses = self.bonus_levels.iter().filter(|&&l| level >= l).count() as i32;
        self.base + level as i32 * self.per_level + bonuses * self.bonus_points
    }
}

fn default_base_points() -> i32 {
    20
}
fn default_points_per_level() -> i32 {
    5
}
fn default_bonus_levels() -> Vec<u32> {
    vec![70, 120]
}
fn default_bonus_points() -> i32 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuffConstants {
    /// Multiplier of the flat-percentage (echo) buff
    #[serde(default = "default_echo_multiplier")]
    pub echo_multiplier: f64,
}

impl Default for BuffConstants {
    fn default() -> Self {
        BuffConstants {
            echo_multiplier: default_echo_multiplier(),
        }
    }
}

fn default_echo_multiplier() -> f64 {
    1.04
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingConstants {
    /// Power-up / magic-up multiplier on a boss
    #[serde(default = "default_boss_power_up")]
    pub boss_power_up: f64,
    /// Power-up / magic-up multiplier on a regular monster
    #[serde(default = "default_power_up")]
    pub power_up: f64,
    /// Share of damage negated by the absorption skill
    #[serde(default = "default_absorption_ratio")]
    pub absorption_ratio: f64,
    /// Magic defense factor for magicians (K)
    #[serde(default = "default_magician_magic_defense")]
    pub magician_magic_defense: f64,
}

impl Default for IncomingConstants {
    fn default() -> Self {
        IncomingConstants {
            boss_power_up: default_boss_power_up(),
            power_up: default_power_up(),
            absorption_ratio: default_absorption_ratio(),
            magician_magic_defense: default_magician_magic_defense(),
        }
    }
}

fn default_boss_power_up() -> f64 {
    1.3
}
fn default_power_up() -> f64 {
    1.15
}
fn default_absorption_ratio() -> f64 {
    0.5
}
fn default_magician_magic_defense() -> f64 {
    1.2
}

/// Evasion rate bounds, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvasionConstants {
    #[serde(default = "default_thief_floor")]
    pub thief_floor: f64,
    #[serde(default = "default_thief_ceiling")]
    pub thief_ceiling: f64,
    #[serde(default = "default_floor")]
    pub floor: f64,
    #[serde(default = "default_ceiling")]
    pub ceiling: f64,
}

impl Default for EvasionConstants {
    fn default() -> Self {
        EvasionConstants {
            thief_floor: default_thief_floor(),
            thief_ceiling: default_thief_ceiling(),
            floor: default_floor(),
            ceiling: default_ceiling(),
        }
    }
}

impl EvasionConstants {
    /// (floor, ceiling) for `job`
    pub fn bounds(&self, job: crate::types::Job) -> (f64, f64) {
        match job {
            crate::types::Job::Thief => (self.thief_floor, self.thief_ceiling),
            _ => (self.floor, self.ceiling),
        }
    }
}

fn default_thief_floor() -> f64 {
    5.0
}
fn default_thief_ceiling() -> f64 {
    95.0
}
fn default_floor() -> f64 {
    2.0
}
fn default_ceiling() -> f64 {
    80.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementConstants {
    #[serde(default = "default_speed_cap")]
    pub speed_cap: i32,
    #[serde(default = "default_jump_cap")]
    pub jump_cap: i32,
}

impl Default for MovementConstants {
    fn default() -> Self {
        MovementConstants {
            speed_cap: default_speed_cap(),
            jump_cap: default_jump_cap(),
        }
    }
}

fn default_speed_cap() -> i32 {
    140
}
fn default_jump_cap() -> i32 {
    123
}
