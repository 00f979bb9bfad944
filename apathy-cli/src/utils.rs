//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared across commands: global options,
//! configuration loading, and construction of the path relations.

use crate::error::CliError;
use apathy::{Config, ConfigBuilder, PathRelations, PathResolver};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory relative paths are resolved against.
    pub base_dir: Option<PathBuf>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        base_dir: global.base_dir.clone(),
        ..Default::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| match e {
            apathy::Error::Io(io) => CliError::Io(io),
            other => CliError::Config(other.to_string()),
        })
}

/// Build the path relations for the effective configuration.
pub fn relations(config: &Config) -> PathRelations {
    PathRelations::with_resolver(PathResolver::from_config(config))
}
