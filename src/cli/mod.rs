//! Command-line interface for revet.
//!
//! Uses clap for argument parsing; each subcommand delegates to its module
//! under `commands`.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// revet - lightweight source review assistant
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress advisory output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan a file tree for review red-flags (TODOs, secrets, debug logging)
    Scan(commands::scan::ScanArgs),
    /// Summarize the size and shape of a git diff
    Diff(commands::diff::DiffArgs),
    /// Generate a Markdown review report combining diff and scan
    Report(commands::report::ReportArgs),
}

impl Cli {
    /// Execute the parsed command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.quiet);

        match self.command {
            Commands::Scan(args) => commands::scan::execute(args, &output),
            Commands::Diff(args) => commands::diff::execute(args, &output),
            Commands::Report(args) => commands::report::execute(args, &output),
        }
    }
}
