//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and manager construction.

use crate::cli::ListFormat;
use crate::error::CliError;
use cabin::{CabinConfig, ConfigBuilder, ReservationManager};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the number of seat rows.
    pub rows: Option<u16>,

    /// Override the number of seats per row.
    pub columns: Option<u16>,

    /// Override the waiting list capacity.
    pub waiting_list_max: Option<usize>,

    /// Use an explicit configuration file.
    pub config: Option<PathBuf>,

    /// Output format for listings.
    pub format: ListFormat,
}

/// Collect the layout flags into a config fragment.
///
/// Flags the user did not pass stay `None` so lower-precedence sources
/// (environment, files, defaults) can fill them in.
fn layout_overrides(global: &GlobalOptions) -> CabinConfig {
    CabinConfig {
        rows: global.rows,
        columns: global.columns,
        waiting_list_max: global.waiting_list_max,
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<CabinConfig, CliError> {
    let mut builder = ConfigBuilder::new().with_config(layout_overrides(global));

    if let Some(ref path) = global.config {
        builder = builder.with_config_path(path.clone());
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the reservation manager for a session from the resolved configuration.
pub fn build_manager(global: &GlobalOptions) -> Result<ReservationManager, CliError> {
    let config = load_configuration(global)?;
    ReservationManager::from_config(&config).map_err(|e| CliError::Config(e.to_string()))
}
