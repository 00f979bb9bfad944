//! Main entry point for the apathy CLI.
//!
//! This is the command-line interface for the apathy path predicates.
//! It provides commands for checking how paths relate:
//! - `is-descendant`, `is-ancestor`, `is-sibling`, `is-equal`: exit-status checks
//! - `relate`: Report every relationship at once
//! - `resolve`: Print resolved paths

mod cli;
mod commands;
mod error;
mod utils;

use apathy::Predicate;
use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; usage errors share the invalid-arguments exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(CliError::InvalidArguments(e.to_string()).exit_code());
        }
    };

    // Library diagnostics go through the `log` facade
    let logger = apathy::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        base_dir: cli.base_dir,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::IsDescendant(cmd) => cmd.execute(Predicate::Descendant, &global),
        cli::Command::IsAncestor(cmd) => cmd.execute(Predicate::Ancestor, &global),
        cli::Command::IsSibling(cmd) => cmd.execute(Predicate::Sibling, &global),
        cli::Command::IsEqual(cmd) => cmd.execute(Predicate::Equal, &global),
        cli::Command::Relate(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || e.exit_code() != 1 {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
