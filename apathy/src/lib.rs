#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # apathy
//!
//! Lexical path relationship predicates.
//!
//! This library answers four questions about a pair of paths: is one a
//! descendant, an ancestor, a sibling, or the same location as the other?
//! Relative paths are resolved against a base directory, `.` and `..` are
//! resolved lexically, and the filesystem is never consulted.
//!
//! ## Core Types
//!
//! - [`PathRelations`]: The four predicates against one base directory
//! - [`PathResolver`] and [`CanonicalPath`]: Lexical path resolution
//! - [`RelationReport`] and [`PathRelationship`]: Every predicate for a pair at once
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! The free functions compare against the current working directory when
//! `other` is `None`:
//!
//! ```
//! use apathy::{is_ancestor, is_descendant};
//! use std::path::Path;
//!
//! assert!(is_descendant("./src", None).unwrap());
//! assert!(is_ancestor("..", None).unwrap());
//! # #[cfg(unix)]
//! assert!(is_descendant("/usr/lib", Some(Path::new("/usr"))).unwrap());
//! ```
//!
//! An explicit base directory makes the answers independent of process
//! state:
//!
//! ```
//! use apathy::PathRelations;
//! use std::path::Path;
//!
//! # #[cfg(unix)] {
//! let relations = PathRelations::with_base_dir("/home/user/apathy");
//! assert!(relations.is_sibling("../other", None).unwrap());
//! assert!(relations.is_equal("/home/user/apathy/", None).unwrap());
//! assert!(!relations.is_descendant("/home/user", Some(Path::new("src"))).unwrap());
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use path::{
    is_ancestor, is_descendant, is_equal, is_sibling, CanonicalPath, PathRelations,
    PathRelationship, PathResolver, Predicate, RelationReport,
};
