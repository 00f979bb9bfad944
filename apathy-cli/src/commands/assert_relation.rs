//! Commands asserting that one path relation holds.

use crate::error::CliError;
use crate::utils::{load_configuration, relations, GlobalOptions};
use apathy::Predicate;
use clap::Args;
use std::path::PathBuf;

/// Arguments shared by `is-descendant`, `is-ancestor`, `is-sibling` and `is-equal`.
#[derive(Args)]
pub struct RelationCommand {
    /// Path being tested
    #[arg(value_name = "SUBJECT")]
    pub subject: PathBuf,

    /// Path to compare against (defaults to the base directory)
    #[arg(value_name = "OTHER")]
    pub other: Option<PathBuf>,

    /// Invert the assertion (fail if the relation holds)
    #[arg(long)]
    pub not: bool,
}

impl RelationCommand {
    pub fn execute(self, predicate: Predicate, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let relations = relations(&config);

        let report = relations.report(&self.subject, self.other.as_deref())?;
        let holds = report.holds(predicate);
        log::info!(
            "{} {} {}: {holds}",
            report.subject,
            predicate,
            report.other
        );

        if holds != self.not {
            return Ok(());
        }

        let msg = if self.not {
            format!(
                "Assertion failed: {} is {} {}",
                report.subject,
                predicate.phrase(),
                report.other
            )
        } else {
            format!(
                "Assertion failed: {} is not {} {}",
                report.subject,
                predicate.phrase(),
                report.other
            )
        };
        Err(CliError::SemanticFailure(msg))
    }
}
