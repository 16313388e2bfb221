//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads, validates and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use turnover_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Hire date column: {}", loader.config().columns.hire_date);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML
    /// - The parsed values fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, "Loaded engine configuration");
        Self::from_config(config)
    }

    /// Parses configuration from an inline YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use turnover_engine::config::ConfigLoader;
    /// use turnover_engine::models::Period;
    ///
    /// let loader = ConfigLoader::from_yaml_str("default_period: Y").unwrap();
    /// assert_eq!(loader.config().default_period, Period::Year);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(yaml).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &EngineConfig) -> EngineResult<()> {
        if config.date_formats.is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "date_formats must list at least one format".to_string(),
            });
        }

        if config.columns.hire_date.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                message: "columns.hire_date must not be empty".to_string(),
            });
        }

        let edges = &config.tenure_buckets_days;
        if edges.first().is_some_and(|first| *first <= 0) {
            return Err(EngineError::InvalidConfig {
                message: "tenure_buckets_days must be positive".to_string(),
            });
        }
        if edges.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(EngineError::InvalidConfig {
                message: "tenure_buckets_days must be strictly ascending".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
