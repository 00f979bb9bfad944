//! Path resolution against an injectable base directory.
//!
//! This module provides the `PathResolver` type, which decides what relative
//! paths are relative *to*. By default that is the process working directory,
//! read fresh on every call; an explicit base directory makes resolution
//! independent of ambient process state.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::path::normalize::{self, resolve_against};
use crate::path::types::CanonicalPath;

/// Resolves paths into [`CanonicalPath`]s against a base directory.
///
/// # Examples
///
/// ```
/// use apathy::path::PathResolver;
/// use std::path::Path;
///
/// # #[cfg(unix)] {
/// let resolver = PathResolver::with_base_dir("/srv/app");
///
/// let resolved = resolver.resolve(Path::new("../data/./cache")).unwrap();
/// assert_eq!(resolved.as_path(), Path::new("/srv/data/cache"));
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    /// Explicit base directory; `None` means the working directory at call time.
    base_dir: Option<PathBuf>,
}

impl PathResolver {
    /// Create a resolver that resolves against the current working directory.
    ///
    /// The working directory is not captured here; every call to
    /// [`base_dir`](Self::base_dir) reads it anew.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::path::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// assert!(resolver.explicit_base_dir().is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with an explicit base directory.
    ///
    /// A relative base is itself resolved against the working directory
    /// whenever a snapshot is taken.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Create a resolver from configuration.
    ///
    /// Uses `config.base_dir` when set, otherwise the working directory.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
        }
    }

    /// The explicitly configured base directory, if any.
    #[must_use]
    pub fn explicit_base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Take a snapshot of the base directory.
    ///
    /// An absolute explicit base is resolved lexically and never touches
    /// process state. Otherwise the working directory is read exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDir`](crate::Error::CurrentDir) if the working
    /// directory is needed and cannot be read.
    pub fn base_dir(&self) -> Result<CanonicalPath> {
        match &self.base_dir {
            Some(base) if base.is_absolute() => CanonicalPath::new(base.clone()),
            Some(base) => {
                let cwd = normalize::current_dir()?;
                Ok(resolve_against(base, &cwd))
            }
            None => normalize::current_dir(),
        }
    }

    /// Resolve a single path against a fresh base directory snapshot.
    ///
    /// Callers resolving several paths that must agree on one base should
    /// take a single [`base_dir`](Self::base_dir) snapshot and use
    /// [`resolve_against`] for each path instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use apathy::path::PathResolver;
    /// use std::path::Path;
    ///
    /// let resolver = PathResolver::new();
    /// let resolved = resolver.resolve(Path::new("./src")).unwrap();
    /// assert!(resolved.as_path().is_absolute());
    /// ```
    pub fn resolve(&self, path: &Path) -> Result<CanonicalPath> {
        if path.is_absolute() {
            return CanonicalPath::new(path.to_path_buf());
        }

        let base = self.base_dir()?;
        let resolved = resolve_against(path, &base);
        log::debug!(
            "resolved {} against {} to {}",
            path.display(),
            base,
            resolved
        );
        Ok(resolved)
    }
}
