//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::game::{MAX_HOLES, MIN_HOLES};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Round defaults applied at setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDefaults {
    /// Hole count pre-selected for a new round
    #[serde(default = "default_holes")]
    pub default_holes: u32,
}

fn default_holes() -> u32 {
    18
}

impl Default for GameDefaults {
    fn default() -> Self {
        Self {
            default_holes: default_holes(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub game: GameDefaults,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            game: GameDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_HOLES..=MAX_HOLES).contains(&self.game.default_holes) {
            return Err(ConfigError::ValidationError(format!(
                "default_holes must be between {} and {}",
                MIN_HOLES, MAX_HOLES
            )));
        }

        Ok(())
    }
}
