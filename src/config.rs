//! Configuration management for simfixture
//!
//! Only the output location and the random seed are configurable; sample
//! shapes and value ranges are fixed in the generators.

use crate::errors::FixtureError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Directory that receives the vision/, audio/ and motion/ subtrees
    pub output_directory: String,
    /// Fixed seed for reproducible output; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            output_directory: "testdata".to_string(),
            seed: None,
        }
    }
}

impl FixtureConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, FixtureError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            FixtureError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let config: FixtureConfig = toml::from_str(&contents).map_err(|e| {
            FixtureError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FixtureError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    FixtureError::ConfigError(format!(
                        "Failed to create config directory: {}",
                        e
                    ))
                })?;
            }
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| {
            FixtureError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, toml_string).map_err(|e| {
            FixtureError::ConfigError(format!("Failed to write config file: {}", e))
        })?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("simfixture.toml")
    }

    /// Load from default location or fall back to defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn output_root(&self) -> PathBuf {
        PathBuf::from(&self.output_directory)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.output_directory.trim().is_empty() {
            return Err("Output directory must not be empty".to_string());
        }
        Ok(())
    }
}
