//! Top-level Roster configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DatabaseConfig, ExportConfig, ImportConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ROSTER_*`)
/// 3. Project config (`roster.toml` in the root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RosterConfig {
    pub database: DatabaseConfig,
    pub import: ImportConfig,
    pub export: ExportConfig,
}

/// Caller-supplied overrides, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub read_pool_size: Option<usize>,
    pub seed_file: Option<PathBuf>,
    pub export_path: Option<PathBuf>,
}

impl RosterConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Configuration for a database file with everything else defaulted.
    pub fn for_database(path: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.database.path = Some(path.into());
        config
    }

    pub fn validate(config: &RosterConfig) -> Result<(), ConfigError> {
        if config.database.read_pool_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "database.read_pool_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(path) = &config.database.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "database.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut RosterConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RosterConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut RosterConfig, other: &RosterConfig) {
        if other.database.path.is_some() {
            base.database.path = other.database.path.clone();
        }
        if other.database.read_pool_size.is_some() {
            base.database.read_pool_size = other.database.read_pool_size;
        }
        if other.import.seed_file.is_some() {
            base.import.seed_file = other.import.seed_file.clone();
        }
        if other.export.default_path.is_some() {
            base.export.default_path = other.export.default_path.clone();
        }
    }

    fn apply_env_overrides(config: &mut RosterConfig) {
        if let Ok(val) = std::env::var("ROSTER_DB_PATH") {
            config.database.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("ROSTER_READ_POOL_SIZE") {
            match val.parse::<usize>() {
                Ok(v) => config.database.read_pool_size = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring unparseable ROSTER_READ_POOL_SIZE"),
            }
        }
        if let Ok(val) = std::env::var("ROSTER_SEED_FILE") {
            config.import.seed_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("ROSTER_EXPORT_PATH") {
            config.export.default_path = Some(PathBuf::from(val));
        }
    }

    fn apply_overrides(config: &mut RosterConfig, overrides: &ConfigOverrides) {
        if let Some(ref path) = overrides.db_path {
            config.database.path = Some(path.clone());
        }
        if let Some(size) = overrides.read_pool_size {
            config.database.read_pool_size = Some(size);
        }
        if let Some(ref path) = overrides.seed_file {
            config.import.seed_file = Some(path.clone());
        }
        if let Some(ref path) = overrides.export_path {
            config.export.default_path = Some(path.clone());
        }
    }
}
