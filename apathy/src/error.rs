//! Error types for the apathy library.
//!
//! The predicates themselves never fail on their own account. Everything in
//! this module originates either in reading the process working directory or
//! in the configuration and output layers around the predicates.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an apathy error.
///
/// # Examples
///
/// ```
/// use apathy::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the apathy library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be used in the requested role.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The process working directory could not be read.
    ///
    /// This is the only failure a predicate can surface, and only when no
    /// absolute base directory was supplied.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization or parsing failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error came from reading the working directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// assert!(Error::CurrentDir(io).is_current_dir());
    /// ```
    #[must_use]
    pub fn is_current_dir(&self) -> bool {
        matches!(self, Self::CurrentDir(_))
    }

    /// Check if the error is a configuration or validation problem.
    ///
    /// Configuration files that fail to parse surface as
    /// [`Error::Validation`]. A bare [`Error::Yaml`] or [`Error::Json`] comes
    /// from rendering output and is not a configuration problem.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
