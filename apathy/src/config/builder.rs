//! Layered configuration assembly.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::Result;
use std::env;
use std::path::PathBuf;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// Sources are applied lowest precedence first: discovered `apathy.yaml`,
/// an explicit configuration file, `APATHY_*` environment variables, and
/// finally any config passed to [`with_config`](Self::with_config).
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that loads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuration discovery from `dir` instead of the working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Load an explicit configuration file on top of the discovered one.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Skip all configuration files, including an explicit one.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip `APATHY_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Assemble the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// or if an environment variable is invalid. An unreadable working
    /// directory only skips discovery.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = self.working_dir.or_else(|| match env::current_dir() {
                Ok(dir) => Some(dir),
                Err(e) => {
                    log::debug!("skipping configuration discovery: {e}");
                    None
                }
            });
            let sources =
                ConfigLoader::load_all(working_dir.as_deref(), self.config_file.as_deref())?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        log::debug!("effective configuration: {config:?}");
        Ok(config)
    }
}
