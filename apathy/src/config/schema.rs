//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be layered on top of each other.
///
/// # Examples
///
/// ```
/// use apathy::config::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     base_dir: Some(PathBuf::from("/srv/app")),
///     ..Default::default()
/// };
/// assert_eq!(config.base_dir, Some(PathBuf::from("/srv/app")));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory that relative paths are resolved against.
    ///
    /// Defaults to the process working directory at call time.
    pub base_dir: Option<PathBuf>,

    /// Output format for relationship reports.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The effective output format, falling back to human-readable output.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = "base_dir: /srv/app\noutput_format: json\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_dir, Some(PathBuf::from("/srv/app")));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("follow_symlinks: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_output_format_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("output_format: xml\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(Config::default().output_format(), OutputFormat::Human);

        let config = Config {
            output_format: Some(OutputFormat::Yaml),
            ..Default::default()
        };
        assert_eq!(config.output_format(), OutputFormat::Yaml);
    }

    #[test]
    fn test_round_trip_through_yaml() {
        let config = Config {
            base_dir: Some(PathBuf::from("/work")),
            output_format: Some(OutputFormat::Json),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("output_format: json"));
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
