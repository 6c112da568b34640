//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent
//! formatting and appropriate exit codes.

use std::fmt;
use std::process;

use fluxpack::transport::TransportError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to construct the HTTP transport
    Transport(TransportError),
    /// An API call failed
    Api(TransportError),
    /// Failed to read an input file
    FileRead { path: String, error: std::io::Error },
    /// Failed to parse an input document
    Parse { path: String, reason: String },
    /// Failed to write an output file
    FileWrite { path: String, error: std::io::Error },
    /// Failed to render a response
    Render(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Api(TransportError::Status { status: 401, .. })
            | CliError::Api(TransportError::Status { status: 403, .. }) => {
                eprintln!();
                eprintln!("Check your credentials:");
                eprintln!("  1. Pass --token or set FLUXPACK_TOKEN");
                eprintln!("  2. The token needs access to the target organization");
            }
            CliError::Api(TransportError::Http(_)) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. Wrong host: check --host or FLUXPACK_HOST");
                eprintln!("  2. The platform instance may not be running");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Transport(e) => write!(f, "Failed to create API client: {}", e),
            CliError::Api(e) => write!(f, "API request failed: {}", e),
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read {}: {}", path, error)
            }
            CliError::Parse { path, reason } => {
                write!(f, "Failed to parse {}: {}", path, reason)
            }
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write {}: {}", path, error)
            }
            CliError::Render(msg) => write!(f, "Failed to render response: {}", msg),
        }
    }
}
