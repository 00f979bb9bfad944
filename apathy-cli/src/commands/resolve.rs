//! Command to print resolved paths.

use crate::error::CliError;
use crate::utils::{load_configuration, relations, GlobalOptions};
use apathy::path::normalize::resolve_against;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Print the canonical form of each path.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve (prints the base directory when none are given)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        // One snapshot, so every path is resolved against the same base
        let base = relations(&config).resolver().base_dir()?;

        let mut out = io::stdout().lock();

        if self.paths.is_empty() {
            writeln!(out, "{base}")?;
            return Ok(());
        }

        for path in &self.paths {
            writeln!(out, "{}", resolve_against(path, &base))?;
        }
        Ok(())
    }
}
