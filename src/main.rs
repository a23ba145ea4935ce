//! Gridorder CLI - build order documents for multi-project workspaces
//!
//! Entry point for the gridorder command-line application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridorder::cli::output::{display_error, OutputConfig};
use gridorder::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output_config = OutputConfig::new(cli.quiet, cli.verbose);

    // RUST_LOG wins over -v/-q
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(output_config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
