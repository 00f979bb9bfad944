//! Command to report every relationship between two paths.

use crate::error::CliError;
use crate::utils::{load_configuration, relations, GlobalOptions};
use apathy::OutputFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Report how SUBJECT relates to OTHER.
#[derive(Args)]
pub struct RelateCommand {
    /// Path being described
    #[arg(value_name = "SUBJECT")]
    pub subject: PathBuf,

    /// Path to compare against (defaults to the base directory)
    #[arg(value_name = "OTHER")]
    pub other: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Output format for the relate command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// One `key: value` line per field
    Human,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}

impl RelateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = self
            .format
            .map_or_else(|| config.output_format(), OutputFormat::from);

        let report = relations(&config).report(&self.subject, self.other.as_deref())?;
        let output = format.create_formatter().format(&report)?;

        println!("{}", output.trim_end());
        Ok(())
    }
}
