//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name looked up when discovering configuration.
pub const CONFIG_FILE_NAME: &str = "apathy.yaml";

/// Precedence of a configuration file discovered by walking upward.
pub const DISCOVERED_PRECEDENCE: u8 = 1;

/// Precedence of a configuration file named explicitly.
pub const EXPLICIT_PRECEDENCE: u8 = 2;

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use apathy::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Some(Path::new(".")), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Loads the nearest `apathy.yaml` at or above `working_dir`, then
    /// `explicit_file` if given. Discovery is skipped when `working_dir` is
    /// `None`. Sources are returned lowest precedence first.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if any file
    /// exists but cannot be read or parsed.
    pub fn load_all(
        working_dir: Option<&Path>,
        explicit_file: Option<&Path>,
    ) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(dir) = working_dir {
            if let Some(discovered) = Self::discover(dir)? {
                sources.push(discovered);
            }
        }

        if let Some(path) = explicit_file {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: EXPLICIT_PRECEDENCE,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Find the nearest configuration file by walking up directories.
    ///
    /// Stops at the first directory containing `apathy.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                log::debug!("loaded configuration from {}", candidate.display());
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: DISCOVERED_PRECEDENCE,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A relative `base_dir` is anchored at the directory containing the file,
    /// so a configuration means the same thing wherever it is read from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file does not exist,
    /// [`Error::Io`] if it exists but cannot be read, and
    /// [`Error::Validation`] if the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::InvalidPath {
                    path: path.to_path_buf(),
                    reason: "configuration file not found".to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let mut config: Config = serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })?;

        if let Some(base_dir) = config.base_dir.take() {
            config.base_dir = Some(match path.parent() {
                Some(dir) if base_dir.is_relative() => dir.join(base_dir),
                _ => base_dir,
            });
        }

        Ok(config)
    }
}
