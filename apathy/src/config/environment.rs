//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `APATHY_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;
use std::path::PathBuf;

/// Overrides the directory relative paths are resolved against.
pub const BASE_DIR_VAR: &str = "APATHY_BASE_DIR";

/// Overrides the report output format.
pub const OUTPUT_FORMAT_VAR: &str = "APATHY_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// Empty values are treated as unset.
///
/// # Examples
///
/// ```no_run
/// use apathy::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `APATHY_OUTPUT_FORMAT` names an
    /// unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(base_dir) = Self::read(BASE_DIR_VAR) {
            config.base_dir = Some(PathBuf::from(base_dir));
        }

        if let Some(format) = Self::read(OUTPUT_FORMAT_VAR) {
            config.output_format = Some(Self::parse_format(&format)?);
        }

        Ok(())
    }

    fn read(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    fn parse_format(value: &str) -> Result<OutputFormat> {
        value
            .trim()
            .to_lowercase()
            .parse()
            .map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_VAR.into(),
                message: format!("Invalid output format: '{value}' (expected human/json/yaml)"),
            })
    }
}
