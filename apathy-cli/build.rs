//! Build script for apathy-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Positional and flag arguments shared by the four predicate commands.
fn relation_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("SUBJECT").help("Path being tested").required(true))
        .arg(Arg::new("OTHER").help("Path to compare against (defaults to the base directory)"))
        .arg(
            Arg::new("not")
                .long("not")
                .help("Invert the assertion (fail if the relation holds)")
                .action(ArgAction::SetTrue),
        )
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("apathy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check how paths relate to each other")
        .long_about(
            "Lexical path relationship checks. Relative paths are resolved against the \
             working directory or --base-dir; the filesystem is never consulted. \
             Predicate commands exit 0 when the relation holds and 1 when it does not.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Resolve relative paths against this directory instead of the working directory")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file")
                .value_name("FILE")
                .global(true),
        )
        .subcommands(vec![
            relation_args(Command::new("is-descendant"))
                .about("Succeed if SUBJECT is at or below OTHER"),
            relation_args(Command::new("is-ancestor"))
                .about("Succeed if SUBJECT is at or above OTHER"),
            relation_args(Command::new("is-sibling"))
                .about("Succeed if SUBJECT and OTHER share a parent directory"),
            relation_args(Command::new("is-equal"))
                .about("Succeed if SUBJECT and OTHER are the same location"),
            Command::new("relate")
                .about("Report every relationship between two paths")
                .long_about("Print all four relations and their classification as text, JSON or YAML"),
            Command::new("resolve")
                .about("Print the resolved form of paths")
                .long_about("Print canonical paths; with no arguments print the base directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("apathy.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
