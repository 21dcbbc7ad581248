//! Configuration for the cabin layout.
//!
//! This module provides hierarchical configuration with support for YAML
//! configuration files, environment variable overrides, and programmatic
//! configuration via a builder.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (CABIN_*)
//! 3. Explicit config file (via `ConfigBuilder::with_config_path`)
//! 4. Project config (`cabin.yaml` in the working directory)
//! 5. User config (`~/.cabin/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Programmatic configuration:
//!
//! ```
//! use cabin::config::{CabinConfig, ConfigBuilder};
//!
//! let custom = CabinConfig {
//!     rows: Some(6),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.effective_rows(), 6);
//! assert_eq!(config.effective_columns(), 3);
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::seat::GridDims;

/// Default number of seat rows.
pub const DEFAULT_ROWS: u16 = 5;

/// Default number of seat columns.
pub const DEFAULT_COLUMNS: u16 = 3;

/// Default waiting list capacity.
pub const DEFAULT_WAITING_LIST_MAX: usize = 10;

/// Cabin layout configuration.
///
/// All fields are optional; unset fields fall back to the built-in
/// defaults when the configuration is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CabinConfig {
    /// Number of seat rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u16>,

    /// Number of seat columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Maximum number of waiting list entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_list_max: Option<usize>,
}

impl CabinConfig {
    /// Returns the configured row count, or the default.
    #[must_use]
    pub fn effective_rows(&self) -> u16 {
        self.rows.unwrap_or(DEFAULT_ROWS)
    }

    /// Returns the configured column count, or the default.
    #[must_use]
    pub fn effective_columns(&self) -> u16 {
        self.columns.unwrap_or(DEFAULT_COLUMNS)
    }

    /// Returns the configured waiting list capacity, or the default.
    #[must_use]
    pub fn effective_waiting_list_max(&self) -> usize {
        self.waiting_list_max.unwrap_or(DEFAULT_WAITING_LIST_MAX)
    }

    /// Overlays another configuration on top of this one.
    ///
    /// Fields set in `higher` replace the corresponding fields here; unset
    /// fields leave the existing values alone.
    pub fn merge_from(&mut self, higher: &CabinConfig) {
        if higher.rows.is_some() {
            self.rows = higher.rows;
        }
        if higher.columns.is_some() {
            self.columns = higher.columns;
        }
        if higher.waiting_list_max.is_some() {
            self.waiting_list_max = higher.waiting_list_max;
        }
    }

    /// Validates all set fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field if any set
    /// value is out of range.
    pub fn validate(&self) -> Result<()> {
        if self.rows == Some(0) {
            return Err(Error::Validation {
                field: "rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.columns == Some(0) {
            return Err(Error::Validation {
                field: "columns".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.waiting_list_max == Some(0) {
            return Err(Error::Validation {
                field: "waiting_list_max".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Resolves the configuration into grid dimensions and a waiting list
    /// capacity, applying defaults for unset fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any set value is out of range.
    pub fn resolve(&self) -> Result<(GridDims, usize)> {
        self.validate()?;
        let dims = GridDims::new(self.effective_rows(), self.effective_columns())?;
        Ok((dims, self.effective_waiting_list_max()))
    }
}

/// Builds a [`CabinConfig`] by merging files, environment variables, and
/// programmatic overrides in precedence order.
///
/// # Examples
///
/// ```no_run
/// use cabin::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("cabin is {} rows", config.effective_rows());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_config_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    overrides: Option<CabinConfig>,
    skip_env: bool,
    skip_files: bool,
}

impl ConfigBuilder {
    /// Creates a builder with no sources configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory searched for a project `cabin.yaml`.
    ///
    /// Defaults to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Overrides the directory searched for the user `config.yaml`.
    ///
    /// Defaults to `~/.cabin`. Mainly useful for tests that need isolation
    /// from the real user configuration.
    #[must_use]
    pub fn with_user_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_config_dir = Some(dir.into());
        self
    }

    /// Reads an explicit configuration file.
    ///
    /// Unlike the discovered files, an explicit path must exist; a missing
    /// file is an error.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Applies programmatic overrides at the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: CabinConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignores CABIN_* environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Merges all configured sources and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, if an explicit
    /// config path does not exist, if an environment variable holds an
    /// unparseable value, or if validation fails.
    pub fn build(self) -> Result<CabinConfig> {
        let mut config = CabinConfig::default();

        if !self.skip_files {
            if let Some(user) = load_user_config(self.user_config_dir.as_deref())? {
                config.merge_from(&user);
            }

            let project_dir = self
                .working_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from("."));
            let project_path = project_dir.join("cabin.yaml");
            if project_path.exists() {
                config.merge_from(&load_file(&project_path)?);
            }

            if let Some(path) = &self.config_path {
                if !path.exists() {
                    return Err(Error::Validation {
                        field: "config".to_string(),
                        message: format!("file not found: {}", path.display()),
                    });
                }
                config.merge_from(&load_file(path)?);
            }
        }

        if !self.skip_env {
            apply_env_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge_from(&overrides);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Loads and parses a YAML configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML is invalid.
pub fn load_file(path: &Path) -> Result<CabinConfig> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Loads the user configuration, if present.
///
/// Reads `{override_dir}/config.yaml` when an override is given, otherwise
/// `~/.cabin/config.yaml`. Returns `Ok(None)` when the home directory cannot
/// be determined or the file does not exist.
fn load_user_config(override_dir: Option<&Path>) -> Result<Option<CabinConfig>> {
    let path = match override_dir {
        Some(dir) => dir.join("config.yaml"),
        None => {
            let Some(home) = home::home_dir() else {
                return Ok(None);
            };
            home.join(".cabin").join("config.yaml")
        }
    };
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(load_file(&path)?))
}

/// Applies CABIN_* environment variable overrides.
fn apply_env_overrides(config: &mut CabinConfig) -> Result<()> {
    if let Ok(val) = env::var("CABIN_ROWS") {
        config.rows = Some(parse_env("CABIN_ROWS", &val)?);
    }
    if let Ok(val) = env::var("CABIN_COLUMNS") {
        config.columns = Some(parse_env("CABIN_COLUMNS", &val)?);
    }
    if let Ok(val) = env::var("CABIN_WAITING_LIST_MAX") {
        config.waiting_list_max = Some(parse_env("CABIN_WAITING_LIST_MAX", &val)?);
    }
    Ok(())
}

/// Parses an environment variable value, naming the variable on failure.
fn parse_env<T: FromStr>(field: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::Validation {
        field: field.to_string(),
        message: format!("must be a non-negative integer, got '{value}'"),
    })
}
