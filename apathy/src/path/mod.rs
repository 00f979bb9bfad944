//! Lexical path resolution and relationship checking.
//!
//! # Key Concepts
//!
//! ## Resolution
//!
//! Resolution converts any path into a [`CanonicalPath`] by:
//! - Joining relative paths onto a base directory
//! - Resolving `.` and `..` components (`..` stops at the root)
//! - Dropping repeated and trailing separators
//!
//! Resolution is purely lexical. Symlinks are never followed and paths need
//! not exist.
//!
//! ## Base directory
//!
//! Relative paths are relative to a base directory. A [`PathResolver`]
//! either carries one explicitly or reads the process working directory,
//! once per operation.
//!
//! # Examples
//!
//! ```
//! use apathy::path::PathResolver;
//! use std::path::Path;
//!
//! # #[cfg(unix)] {
//! let resolver = PathResolver::with_base_dir("/home/user");
//! let resolved = resolver.resolve(Path::new("./project/../notes/")).unwrap();
//! assert_eq!(resolved.as_path(), Path::new("/home/user/notes"));
//! # }
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use apathy::path::PathRelations;
//! use std::path::Path;
//!
//! # #[cfg(unix)] {
//! let relations = PathRelations::with_base_dir("/home/user");
//!
//! assert!(relations.is_descendant("project/src", None).unwrap());
//! assert!(relations.is_ancestor("/home", None).unwrap());
//! assert!(relations.is_sibling("../guest", None).unwrap());
//! assert!(relations.is_equal("project/..", None).unwrap());
//! # }
//! ```

pub mod normalize;
pub mod relationship;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::{
    descends_from, is_ancestor, is_descendant, is_equal, is_sibling, shares_parent,
    PathRelations, PathRelationship, Predicate, RelationReport,
};
pub use resolver::PathResolver;
pub use types::CanonicalPath;
