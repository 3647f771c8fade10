//! Configuration loading from TOML files

mod constants;
mod tables;

pub use constants::{
    BuffConstants, EvasionConstants, GameConstants, IncomingConstants, MovementConstants,
    PointConstants,
};
pub use tables::{
    tables, BuffKind, BuffPreset, EvasionSkill, GameTables, PassiveSkill, ReductionSkill,
    SelfBuffTable, WeaponConstant,
};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while reading or validating game data
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("inconsistent game data: {0}")]
    ValidationError(String),
}

pub(crate) fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Deserialize a TOML file
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    parse_toml(&read(path)?)
}

/// Deserialize TOML text, as used for the embedded tables
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Deserialize a JSON file (item and monster lists)
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(&read(path)?)?)
}
