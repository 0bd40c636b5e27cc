//! Main application configuration
//!
//! Defaults can be overridden first by a TOML file, then by environment
//! variables, then by CLI flags in the binary.

use crate::config::rating::RatingSettings;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub source: SourceSettings,
    pub rating: RatingSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Match history source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Path to the primary history JSON document
    pub history_path: Option<PathBuf>,
    /// Path to an optional legacy-format export array, appended after
    /// conversion
    pub legacy_path: Option<PathBuf>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "mars-stats".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to
    /// defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }
        if let Ok(path) = env::var("HISTORY_PATH") {
            config.source.history_path = Some(PathBuf::from(path));
        }
        if let Ok(path) = env::var("LEGACY_HISTORY_PATH") {
            config.source.legacy_path = Some(PathBuf::from(path));
        }
        if let Ok(base_k) = env::var("RATING_BASE_K") {
            config.rating.base_k = base_k
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_BASE_K value: {}", base_k))?;
        }
        if let Ok(initial) = env::var("RATING_INITIAL") {
            config.rating.initial_rating = initial
                .parse()
                .map_err(|_| anyhow!("Invalid RATING_INITIAL value: {}", initial))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;
        let config: AppConfig = toml::from_str(&raw)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    if config.rating.base_k <= 0.0 {
        return Err(anyhow!("Rating base K must be positive"));
    }

    if !config.rating.initial_rating.is_finite() {
        return Err(anyhow!("Initial rating must be finite"));
    }

    Ok(())
}
