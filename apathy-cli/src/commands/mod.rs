//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `assert_relation`: The four predicate checks (`is-descendant` etc.)
//! - `relate`: Report every relationship between two paths
//! - `resolve`: Print resolved paths
//! - `completions`: Generate shell completion scripts

pub mod assert_relation;
pub mod completions;
pub mod relate;
pub mod resolve;

pub use assert_relation::RelationCommand;
pub use completions::CompletionsCommand;
pub use relate::RelateCommand;
pub use resolve::ResolveCommand;
