//! Path relationship checking.
//!
//! This module answers four questions about a pair of paths: is one at or
//! below the other, at or above it, do they share a parent, and are they the
//! same location. Every answer is computed on canonical forms, so `./foo/..`
//! and `.` are indistinguishable here.
//!
//! Descendant and ancestor are reflexive: a path is both its own descendant
//! and its own ancestor. A path is also its own sibling, simply because it
//! shares its parent with itself.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::normalize::resolve_against;
use crate::path::resolver::PathResolver;
use crate::path::types::CanonicalPath;

/// Check whether `subject` is at or below `other`.
///
/// Walks upward from `subject` one parent at a time until it meets `other`
/// or reaches the root. The root is its own parent, so the walk stops there
/// explicitly.
///
/// # Examples
///
/// ```
/// use apathy::path::{descends_from, CanonicalPath};
/// use std::path::PathBuf;
///
/// # #[cfg(unix)] {
/// let foo = CanonicalPath::new(PathBuf::from("/foo")).unwrap();
/// let bar = CanonicalPath::new(PathBuf::from("/foo/bar")).unwrap();
///
/// assert!(descends_from(&bar, &foo));
/// assert!(descends_from(&foo, &foo));
/// assert!(!descends_from(&foo, &bar));
/// # }
/// ```
#[must_use]
pub fn descends_from(subject: &CanonicalPath, other: &CanonicalPath) -> bool {
    let target = other.as_path().as_os_str();
    let mut current = subject.as_path();

    loop {
        if current.as_os_str() == target {
            return true;
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return false,
        }
    }
}

/// Check whether two canonical paths have the same immediate parent.
#[must_use]
pub fn shares_parent(subject: &CanonicalPath, other: &CanonicalPath) -> bool {
    subject.parent() == other.parent()
}

/// Relationship predicates over an injectable base directory.
///
/// Each call takes one snapshot of the base directory and resolves both
/// arguments against it, so a working directory changing mid-call cannot
/// produce a mixed answer. Passing `None` for `other` compares against the
/// base directory itself.
///
/// # Examples
///
/// ```
/// use apathy::path::PathRelations;
/// use std::path::Path;
///
/// # #[cfg(unix)] {
/// let relations = PathRelations::with_base_dir("/home/user/apathy");
///
/// assert!(relations.is_descendant("./foo", None).unwrap());
/// assert!(!relations.is_descendant("/foo", None).unwrap());
/// assert!(relations.is_descendant("../foo", Some(Path::new("/"))).unwrap());
/// assert!(relations.is_ancestor("/", Some(Path::new("/foo"))).unwrap());
/// assert!(relations.is_sibling("./foo", Some(Path::new("./bar"))).unwrap());
/// assert!(relations.is_equal("./foo/../bar/.", Some(Path::new("./bar"))).unwrap());
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathRelations {
    resolver: PathResolver,
}

impl PathRelations {
    /// Create predicates that resolve against the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create predicates that resolve against an explicit base directory.
    #[must_use]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_resolver(PathResolver::with_base_dir(base_dir))
    }

    /// Create predicates on top of an existing resolver.
    #[must_use]
    pub fn with_resolver(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    /// The resolver used for every predicate.
    #[must_use]
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Resolve `subject` and `other` against a single base snapshot.
    ///
    /// `other` defaults to the base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    pub fn resolve_pair(
        &self,
        subject: impl AsRef<Path>,
        other: Option<&Path>,
    ) -> Result<(CanonicalPath, CanonicalPath)> {
        let subject = subject.as_ref();

        // Two absolute paths never consult the base directory.
        if let Some(other) = other.filter(|o| o.is_absolute() && subject.is_absolute()) {
            return Ok((
                CanonicalPath::new(subject.to_path_buf())?,
                CanonicalPath::new(other.to_path_buf())?,
            ));
        }

        let base = self.resolver.base_dir()?;
        let subject = resolve_against(subject, &base);
        let other = match other {
            Some(other) => resolve_against(other, &base),
            None => base,
        };
        log::debug!("comparing {subject} with {other}");
        Ok((subject, other))
    }

    /// Check whether `subject` is at or below `other`.
    ///
    /// Reflexive: every path is its own descendant.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    pub fn is_descendant(&self, subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
        let (subject, other) = self.resolve_pair(subject, other)?;
        Ok(descends_from(&subject, &other))
    }

    /// Check whether `subject` is at or above `other`.
    ///
    /// Same as [`is_descendant`](Self::is_descendant) with the arguments
    /// swapped. The default applies to `other`, the candidate descendant.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    pub fn is_ancestor(&self, subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
        let (subject, other) = self.resolve_pair(subject, other)?;
        Ok(descends_from(&other, &subject))
    }

    /// Check whether `subject` and `other` share an immediate parent.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    pub fn is_sibling(&self, subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
        let (subject, other) = self.resolve_pair(subject, other)?;
        Ok(shares_parent(&subject, &other))
    }

    /// Check whether `subject` and `other` name the same canonical location.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    pub fn is_equal(&self, subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
        let (subject, other) = self.resolve_pair(subject, other)?;
        Ok(subject == other)
    }

    /// Evaluate every predicate for one pair of paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    pub fn report(&self, subject: impl AsRef<Path>, other: Option<&Path>) -> Result<RelationReport> {
        let (subject, other) = self.resolve_pair(subject, other)?;
        Ok(RelationReport::new(subject, other))
    }
}

/// Check whether `subject` is at or below `other`, resolving relative paths
/// against the current working directory.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read.
///
/// # Examples
///
/// ```
/// assert!(apathy::is_descendant("./foo", None).unwrap());
/// ```
pub fn is_descendant(subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
    PathRelations::new().is_descendant(subject, other)
}

/// Check whether `subject` is at or above `other`, resolving relative paths
/// against the current working directory.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read.
///
/// # Examples
///
/// ```
/// assert!(apathy::is_ancestor("..", None).unwrap());
/// assert!(!apathy::is_ancestor("./foo", None).unwrap());
/// ```
pub fn is_ancestor(subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
    PathRelations::new().is_ancestor(subject, other)
}

/// Check whether two paths share an immediate parent, resolving relative
/// paths against the current working directory.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// assert!(apathy::is_sibling("./foo", Some(Path::new("./bar"))).unwrap());
/// ```
pub fn is_sibling(subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
    PathRelations::new().is_sibling(subject, other)
}

/// Check whether two paths name the same location, resolving relative paths
/// against the current working directory.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// assert!(apathy::is_equal(".", None).unwrap());
/// assert!(apathy::is_equal("./foo", Some(Path::new("foo"))).unwrap());
/// ```
pub fn is_equal(subject: impl AsRef<Path>, other: Option<&Path>) -> Result<bool> {
    PathRelations::new().is_equal(subject, other)
}

/// One of the four relationship predicates, chosen by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Predicate {
    /// `subject` is at or below `other`.
    Descendant,
    /// `subject` is at or above `other`.
    Ancestor,
    /// `subject` and `other` share a parent.
    Sibling,
    /// `subject` and `other` are the same location.
    Equal,
}

impl Predicate {
    /// All predicates, in reporting order.
    pub const ALL: [Self; 4] = [Self::Descendant, Self::Ancestor, Self::Sibling, Self::Equal];

    /// Evaluate this predicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be determined.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::path::{PathRelations, Predicate};
    /// use std::path::Path;
    ///
    /// # #[cfg(unix)] {
    /// let relations = PathRelations::with_base_dir("/work");
    /// assert!(Predicate::Ancestor
    ///     .evaluate(&relations, "/", Some(Path::new("./src")))
    ///     .unwrap());
    /// # }
    /// ```
    pub fn evaluate(
        self,
        relations: &PathRelations,
        subject: impl AsRef<Path>,
        other: Option<&Path>,
    ) -> Result<bool> {
        match self {
            Self::Descendant => relations.is_descendant(subject, other),
            Self::Ancestor => relations.is_ancestor(subject, other),
            Self::Sibling => relations.is_sibling(subject, other),
            Self::Equal => relations.is_equal(subject, other),
        }
    }

    /// Phrase used in messages, e.g. "a descendant of".
    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Descendant => "a descendant of",
            Self::Ancestor => "an ancestor of",
            Self::Sibling => "a sibling of",
            Self::Equal => "equal to",
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descendant => write!(f, "descendant"),
            Self::Ancestor => write!(f, "ancestor"),
            Self::Sibling => write!(f, "sibling"),
            Self::Equal => write!(f, "equal"),
        }
    }
}

impl FromStr for Predicate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "descendant" => Ok(Self::Descendant),
            "ancestor" => Ok(Self::Ancestor),
            "sibling" => Ok(Self::Sibling),
            "equal" => Ok(Self::Equal),
            _ => Err(Error::Validation {
                field: "predicate".to_string(),
                message: format!("unknown predicate '{s}'"),
            }),
        }
    }
}

/// Relationship between two paths.
///
/// This enum describes how two paths relate to each other in the filesystem
/// hierarchy, picking the first that holds in declaration order.
///
/// # Examples
///
/// ```
/// use apathy::path::{CanonicalPath, PathRelationship};
/// use std::path::PathBuf;
///
/// # #[cfg(unix)] {
/// let parent = CanonicalPath::new(PathBuf::from("/home/user")).unwrap();
/// let child = CanonicalPath::new(PathBuf::from("/home/user/project")).unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathRelationship {
    /// The paths are the same.
    Same,

    /// The first path is a strict ancestor of the second.
    Ancestor,

    /// The first path is a strict descendant of the second.
    Descendant,

    /// The paths are distinct but share an immediate parent.
    Sibling,

    /// None of the above.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two canonical paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::path::{CanonicalPath, PathRelationship};
    /// use std::path::PathBuf;
    ///
    /// # #[cfg(unix)] {
    /// let path = |s: &str| CanonicalPath::new(PathBuf::from(s)).unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&path("/a"), &path("/a/b")), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&path("/a/b"), &path("/a")), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&path("/a"), &path("/a")), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&path("/a"), &path("/b")), PathRelationship::Sibling);
    /// assert_eq!(PathRelationship::between(&path("/a/x"), &path("/b/y")), PathRelationship::Unrelated);
    /// # }
    /// ```
    #[must_use]
    pub fn between(path1: &CanonicalPath, path2: &CanonicalPath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }

        if descends_from(path2, path1) {
            return Self::Ancestor;
        }

        if descends_from(path1, path2) {
            return Self::Descendant;
        }

        if shares_parent(path1, path2) {
            return Self::Sibling;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical.
    ///
    /// Returns `true` for `Same`, `Ancestor` and `Descendant`.
    ///
    /// # Examples
    ///
    /// ```
    /// use apathy::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Sibling.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Same => {
                format!(
                    "{} and {} are the same path",
                    path1.display(),
                    path2.display()
                )
            }
            Self::Ancestor => {
                format!("{} is an ancestor of {}", path1.display(), path2.display())
            }
            Self::Descendant => {
                format!("{} is a descendant of {}", path1.display(), path2.display())
            }
            Self::Sibling => {
                format!("{} is a sibling of {}", path1.display(), path2.display())
            }
            Self::Unrelated => {
                format!(
                    "{} and {} are unrelated paths",
                    path1.display(),
                    path2.display()
                )
            }
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Same => write!(f, "same"),
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Sibling => write!(f, "sibling"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

/// Every predicate evaluated for one resolved pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationReport {
    /// The resolved subject.
    pub subject: CanonicalPath,
    /// The resolved comparison path.
    pub other: CanonicalPath,
    /// `subject` is at or below `other`.
    pub descendant: bool,
    /// `subject` is at or above `other`.
    pub ancestor: bool,
    /// `subject` and `other` share a parent.
    pub sibling: bool,
    /// `subject` and `other` are the same location.
    pub equal: bool,
    /// The single most specific relationship.
    pub relationship: PathRelationship,
}

impl RelationReport {
    /// Build a report for an already resolved pair.
    #[must_use]
    pub fn new(subject: CanonicalPath, other: CanonicalPath) -> Self {
        Self {
            descendant: descends_from(&subject, &other),
            ancestor: descends_from(&other, &subject),
            sibling: shares_parent(&subject, &other),
            equal: subject == other,
            relationship: PathRelationship::between(&subject, &other),
            subject,
            other,
        }
    }

    /// Look up one predicate's result.
    #[must_use]
    pub fn holds(&self, predicate: Predicate) -> bool {
        match predicate {
            Predicate::Descendant => self.descendant,
            Predicate::Ancestor => self.ancestor,
            Predicate::Sibling => self.sibling,
            Predicate::Equal => self.equal,
        }
    }
}
