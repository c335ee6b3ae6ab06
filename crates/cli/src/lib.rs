//! # pivotgen CLI
//!
//! Command-line interface for pivotgen.
//!
//! ## Commands
//!
//! - `generate:migration:pivot <tableOne> <tableTwo> [--force] [--dry-run]`
//!   - Create a new migration pivot class
//!

pub mod commands;
pub mod output;
pub mod ux;

pub use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Parser)]
#[command(
    name = "pivotgen",
    version,
    about = "Generate pivot-table migrations from stub templates."
)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        env = "PIVOTGEN_CONFIG",
        help = "Configuration file. [default: generators.toml, skipped if missing]"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "PIVOTGEN_PIVOT_STUB",
        help = "Pivot stub template. Overrides generators.pivot_stub."
    )]
    pub stub: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Set level of verbosity. [default: WARN]\n\t-v: INFO\n\t-vv: DEBUG\n\t-vvv: TRACE\n--quiet takes precedence over --verbose."
    )]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::SetTrue,
        help = "Only show ERROR level logs.\n--quiet takes precedence over --verbose."
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        action = clap::ArgAction::SetTrue,
        help = "Enable JSON output format. Human readable output and logs are disabled when this flag is set."
    )]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct PivotArgs {
    #[arg(help = "The name of the first table.")]
    pub table_one: String,

    #[arg(help = "The name of the second table.")]
    pub table_two: String,

    #[arg(short, long, help = "Overwrite the migration if it already exists.")]
    pub force: bool,

    #[arg(long, help = "Render the migration and print it without writing anything.")]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        name = "generate:migration:pivot",
        about = "Create a new migration pivot class"
    )]
    MigrationPivot(PivotArgs),
}

impl std::fmt::Display for Commands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Commands::MigrationPivot(_) => "generate:migration:pivot",
        };
        write!(f, "{name}")
    }
}
