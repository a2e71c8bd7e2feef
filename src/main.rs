use anyhow::Result;
use clap::Parser;
use paths::cli::Cli;
use paths::commands;
use std::io;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing on stderr so stdout only carries rendered output
    let default_filter = if cli.verbose { "paths=debug" } else { "paths=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // Execute command
    commands::execute(cli)
}
