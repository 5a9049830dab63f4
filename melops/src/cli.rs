//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "mel")]
#[command(about = "Styled subtitle and transcript alignment tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a styled ASS subtitle file from a transcript or captions
    Style(crate::style::Args),

    /// Align a transcript against a corrected text
    Align(crate::align::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Style(args) => crate::style::execute(args.try_into()?),
        Commands::Align(args) => crate::align::execute(args.try_into()?),
    }
}
