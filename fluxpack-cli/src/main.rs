//! FluxPack CLI - command-line interface
//!
//! This binary provides a command-line interface to the FluxPack library
//! for managing packages and stacks on a time-series platform.

mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::Cli;

/// Initialize logging to stderr, honoring `RUST_LOG` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = commands::run(cli).await {
        e.exit();
    }
}
