//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, RelateCommand, RelationCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check how paths relate to each other.
#[derive(Parser)]
#[command(name = "apathy")]
#[command(version, about = "Check how paths relate to each other", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Resolve relative paths against this directory instead of the working directory
    #[arg(long, value_name = "PATH", global = true)]
    pub base_dir: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Succeed if SUBJECT is at or below OTHER
    IsDescendant(RelationCommand),

    /// Succeed if SUBJECT is at or above OTHER
    IsAncestor(RelationCommand),

    /// Succeed if SUBJECT and OTHER share a parent directory
    IsSibling(RelationCommand),

    /// Succeed if SUBJECT and OTHER are the same location
    IsEqual(RelationCommand),

    /// Report every relationship between two paths
    Relate(RelateCommand),

    /// Print the resolved form of paths
    Resolve(ResolveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
