//! Main application configuration
//!
//! This module defines the configuration for the canteen-wait tool, including
//! TOML file loading, environment variable overrides and validation.

use crate::wait_time::EstimatorConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub estimator: EstimatorConfig,
    pub menu: MenuSettings,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Where menu snapshots come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSettings {
    /// JSON menu export; standard input is read when unset
    pub snapshot_path: Option<PathBuf>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "canteen-wait".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::parse_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config = Self::parse_toml(contents)?;
        validate_config(&config)?;
        Ok(config)
    }

    fn parse_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| anyhow!("Invalid TOML configuration: {}", e))
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(penalty) = env::var("WAIT_PENALTY") {
            self.estimator.penalty = penalty
                .parse()
                .map_err(|_| anyhow!("Invalid WAIT_PENALTY value: {}", penalty))?;
        }
        if let Ok(path) = env::var("MENU_SNAPSHOT_PATH") {
            self.menu.snapshot_path = Some(PathBuf::from(path));
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.estimator.validate()?;

    if let Some(path) = &config.menu.snapshot_path {
        if path.as_os_str().is_empty() {
            return Err(anyhow!("Menu snapshot path cannot be empty"));
        }
    }

    Ok(())
}
