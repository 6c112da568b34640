//! CLI command definitions and dispatch.
//!
//! Global connection flags live on [`Cli`]; each subcommand module owns
//! its own argument types and handlers. The production transport is
//! built once here and handed to the handlers through the facade.

mod pkg;
mod stacks;

use std::time::Duration;

use clap::{Parser, Subcommand};

use fluxpack::config::{ClientConfig, DEFAULT_BASE_URL};
use fluxpack::packages::PackagesApi;
use fluxpack::transport::HttpTransport;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "fluxpack", version)]
#[command(about = "Manage packages and stacks on a time-series platform", long_about = None)]
pub struct Cli {
    /// Base URL of the platform API
    #[arg(long, global = true, env = "FLUXPACK_HOST", default_value = DEFAULT_BASE_URL)]
    pub host: String,

    /// API token (sent as `Authorization: Token <t>`)
    #[arg(long, global = true, env = "FLUXPACK_TOKEN")]
    pub token: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or apply package documents
    #[command(subcommand)]
    Pkg(pkg::PkgCommands),

    /// Manage stacks
    #[command(subcommand)]
    Stacks(stacks::StacksCommands),
}

/// Run a parsed CLI invocation against a real transport.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config =
        ClientConfig::new(&cli.host).with_timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(token) = cli.token {
        config = config.with_token(token);
    }

    let transport = HttpTransport::new(&config).map_err(CliError::Transport)?;
    let api = PackagesApi::new(transport);

    match cli.command {
        Commands::Pkg(cmd) => pkg::run(cmd, &api).await,
        Commands::Stacks(cmd) => stacks::run(cmd, &api).await,
    }
}

/// Pretty-print a JSON-serializable response to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|e| CliError::Render(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}
