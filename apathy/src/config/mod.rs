//! Configuration system for apathy.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (`apathy.yaml`, discovered or explicit)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`APATHY_*`)
//! 3. An explicit configuration file (via `ConfigBuilder::with_config_file`)
//! 4. The nearest `apathy.yaml` at or above the working directory
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use apathy::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir("/path/to/project")
//!     .build()
//!     .unwrap();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use apathy::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let custom = Config {
//!     base_dir: Some(PathBuf::from("/srv/app")),
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
//! assert_eq!(config.base_dir, Some(PathBuf::from("/srv/app")));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
