//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use apathy::config::{Config, ConfigMerger};
/// use std::path::PathBuf;
///
/// let low = Config { base_dir: Some(PathBuf::from("/low")), ..Default::default() };
/// let high = Config { base_dir: Some(PathBuf::from("/high")), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.base_dir, Some(PathBuf::from("/high")));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target if `Some`).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.base_dir.is_some() {
            target.base_dir.clone_from(&source.base_dir);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
