//! Core types for path handling.
//!
//! This module defines [`CanonicalPath`], the only form in which paths are
//! ever compared.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::normalize::resolve_components;

/// An absolute path with every `.` and `..` component resolved away.
///
/// A canonical path never carries a trailing separator, except for the root
/// itself. Canonical here is purely lexical: no symlink is followed and the
/// path need not exist.
///
/// Two canonical paths are equal iff their underlying OS strings are byte
/// for byte identical.
///
/// # Examples
///
/// ```
/// use apathy::path::CanonicalPath;
/// use std::path::PathBuf;
///
/// # #[cfg(unix)] {
/// let path = CanonicalPath::new(PathBuf::from("/srv/./www/../data/")).unwrap();
/// assert_eq!(path.as_path(), std::path::Path::new("/srv/data"));
/// # }
/// ```
#[derive(Debug, Clone, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalPath {
    path: PathBuf,
}

impl CanonicalPath {
    /// Create a canonical path from an absolute path.
    ///
    /// `.` and `..` components in the input are resolved lexically.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::path::CanonicalPath;
    /// use std::path::PathBuf;
    ///
    /// assert!(CanonicalPath::new(PathBuf::from("relative/path")).is_err());
    /// ```
    pub fn new(path: PathBuf) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path,
                reason: "Path must be absolute to be canonical".to_string(),
            });
        }
        Ok(Self::from_resolved(resolve_components(&path)))
    }

    /// Wrap a path that is already absolute and component-resolved.
    pub(crate) fn from_resolved(path: PathBuf) -> Self {
        debug_assert!(path.is_absolute());
        Self { path }
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// Check whether this path is a filesystem root.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::path::CanonicalPath;
    /// use std::path::PathBuf;
    ///
    /// # #[cfg(unix)] {
    /// assert!(CanonicalPath::new(PathBuf::from("/")).unwrap().is_root());
    /// assert!(!CanonicalPath::new(PathBuf::from("/usr")).unwrap().is_root());
    /// # }
    /// ```
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.parent().is_none()
    }

    /// The immediate parent directory.
    ///
    /// The root is its own parent, the same convention `dirname` follows.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::path::CanonicalPath;
    /// use std::path::{Path, PathBuf};
    ///
    /// # #[cfg(unix)] {
    /// let usr = CanonicalPath::new(PathBuf::from("/usr/lib")).unwrap().parent();
    /// assert_eq!(usr.as_path(), Path::new("/usr"));
    ///
    /// let root = CanonicalPath::new(PathBuf::from("/")).unwrap();
    /// assert_eq!(root.parent(), root);
    /// # }
    /// ```
    #[must_use]
    pub fn parent(&self) -> Self {
        match self.path.parent() {
            Some(parent) => Self {
                path: parent.to_path_buf(),
            },
            None => self.clone(),
        }
    }
}

impl PartialEq for CanonicalPath {
    fn eq(&self, other: &Self) -> bool {
        self.path.as_os_str() == other.path.as_os_str()
    }
}

impl Hash for CanonicalPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.as_os_str().hash(state);
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl From<CanonicalPath> for PathBuf {
    fn from(path: CanonicalPath) -> Self {
        path.path
    }
}
