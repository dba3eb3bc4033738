//! subcase command-line entry point

use clap::Parser;
use subcase_cli::commands::Commands;

/// Subtitle casing and punctuation normalization
#[derive(Debug, Parser)]
#[command(name = "subcase", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
