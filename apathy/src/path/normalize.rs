//! Lexical path resolution.
//!
//! This module turns any absolute or relative path into a [`CanonicalPath`]:
//! - Relative paths are joined onto a base directory
//! - `.` components are dropped
//! - `..` components pop the preceding component, clamping at the root
//! - Repeated and trailing separators disappear
//!
//! Nothing here touches the filesystem. Symlinks are not followed and paths
//! need not exist.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::CanonicalPath;

/// Resolve `.` and `..` components of a path.
///
/// `..` directly below the root stays at the root, so `/..` resolves to `/`.
/// A relative path keeps any leading `..` it has no component to pop.
///
/// # Examples
///
/// ```
/// use apathy::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)] {
/// // Resolves . and ..
/// let resolved = resolve_components(Path::new("/a/./b/../c"));
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// // Clamps at the root
/// let resolved = resolve_components(Path::new("/a/../../c"));
/// assert_eq!(resolved, PathBuf::from("/c"));
/// # }
///
/// // Keeps unresolvable parents of a relative path
/// let resolved = resolve_components(Path::new("../a/./b/.."));
/// assert_eq!(resolved, PathBuf::from("../a"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
            }
            Component::RootDir => {
                result.push(component);
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => match result.components().next_back() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    result.push(Component::ParentDir);
                }
            },
        }
    }

    result
}

/// Resolve `path` against an already canonical base directory.
///
/// Absolute paths ignore `base`. The empty path resolves to `base` itself,
/// exactly like `"."`.
///
/// # Examples
///
/// ```
/// use apathy::path::CanonicalPath;
/// use apathy::path::normalize::resolve_against;
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)] {
/// let base = CanonicalPath::new(PathBuf::from("/home/user")).unwrap();
///
/// let resolved = resolve_against(Path::new("../other/./src"), &base);
/// assert_eq!(resolved.as_path(), Path::new("/home/other/src"));
///
/// let resolved = resolve_against(Path::new("/etc"), &base);
/// assert_eq!(resolved.as_path(), Path::new("/etc"));
///
/// assert_eq!(resolve_against(Path::new(""), &base), base);
/// # }
/// ```
#[must_use]
pub fn resolve_against(path: &Path, base: &CanonicalPath) -> CanonicalPath {
    if path.is_absolute() {
        return CanonicalPath::from_resolved(resolve_components(path));
    }

    if path.as_os_str().is_empty() {
        return base.clone();
    }

    // A drive-relative Windows path such as `C:foo` carries its own prefix;
    // joining would replace the base instead of extending it.
    let joined = base.as_path().join(path);
    if joined.is_absolute() {
        CanonicalPath::from_resolved(resolve_components(&joined))
    } else {
        base.clone()
    }
}

/// Read the process working directory as a canonical path.
///
/// # Errors
///
/// Returns [`Error::CurrentDir`] if the working directory cannot be read,
/// for example because it was deleted.
pub fn current_dir() -> Result<CanonicalPath> {
    let cwd = env::current_dir().map_err(Error::CurrentDir)?;
    CanonicalPath::new(cwd)
}

/// Normalize a path to absolute form against the current working directory.
///
/// The working directory is read once, and only when `path` is relative.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use apathy::path::normalize::normalize;
/// use std::path::Path;
///
/// // Normalize relative path
/// let normalized = normalize(Path::new("./src")).unwrap();
/// assert!(normalized.is_absolute());
///
/// // Resolve . and ..
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized, Path::new("/a/c"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(resolve_components(path));
    }

    let cwd = current_dir()?;
    Ok(resolve_against(path, &cwd).into_path_buf())
}

/// Check whether a path still contains `.` or `..` components.
#[must_use]
pub fn has_relative_components(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::CurDir | Component::ParentDir))
}
