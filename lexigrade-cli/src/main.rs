//! Lexigrade command-line entry point

use anyhow::Result;
use clap::Parser;
use lexigrade_cli::commands::Commands;

/// Readability scores and consensus grade for English text
#[derive(Debug, Parser)]
#[command(name = "lexigrade", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
