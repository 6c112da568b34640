//! `stacks` subcommands for listing, creating, and maintaining stacks.

use std::path::PathBuf;

use clap::Subcommand;

use fluxpack::packages::{PackagesApi, StackCreate, StackListFilter, StackUpdate};
use fluxpack::transport::Transport;

use super::print_json;
use crate::error::CliError;

/// Stacks subcommands.
#[derive(Subcommand)]
pub enum StacksCommands {
    /// List stacks in an organization
    List {
        /// Organization ID
        #[arg(long)]
        org_id: String,

        /// Only stacks with this name
        #[arg(long)]
        name: Option<String>,

        /// Only the stack with this ID
        #[arg(long)]
        stack_id: Option<String>,
    },

    /// Create a stack
    Create {
        /// Organization ID
        #[arg(long)]
        org_id: String,

        /// Stack name
        #[arg(long)]
        name: String,

        /// Stack description
        #[arg(long)]
        description: Option<String>,

        /// Package URL tracked by the stack (repeatable)
        #[arg(long = "url")]
        urls: Vec<String>,
    },

    /// Show a stack
    Get {
        /// Stack ID
        stack_id: String,
    },

    /// Update a stack's name, description, or URLs
    Update {
        /// Stack ID
        stack_id: String,

        /// New stack name
        #[arg(long)]
        name: Option<String>,

        /// New stack description
        #[arg(long)]
        description: Option<String>,

        /// Replacement package URL (repeatable; replaces the full list)
        #[arg(long = "url")]
        urls: Vec<String>,
    },

    /// Delete a stack
    Delete {
        /// Stack ID
        stack_id: String,

        /// Organization ID
        #[arg(long)]
        org_id: String,
    },

    /// Export a stack as a package document
    Export {
        /// Stack ID
        stack_id: String,

        /// Organization ID
        #[arg(long)]
        org_id: String,

        /// Write the package to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Run a stacks subcommand.
pub async fn run<T: Transport>(cmd: StacksCommands, api: &PackagesApi<T>) -> Result<(), CliError> {
    match cmd {
        StacksCommands::List {
            org_id,
            name,
            stack_id,
        } => {
            let filter = StackListFilter {
                org_id,
                name,
                stack_id,
            };
            let list = api.list_stacks(&filter).await.map_err(CliError::Api)?;
            print_json(&list.stacks)
        }

        StacksCommands::Create {
            org_id,
            name,
            description,
            urls,
        } => {
            let create = StackCreate {
                org_id,
                name,
                description,
                urls,
            };
            let stack = api.create_stack(&create).await.map_err(CliError::Api)?;
            print_json(&stack)
        }

        StacksCommands::Get { stack_id } => {
            let stack = api.read_stack(&stack_id).await.map_err(CliError::Api)?;
            print_json(&stack)
        }

        StacksCommands::Update {
            stack_id,
            name,
            description,
            urls,
        } => {
            let update = StackUpdate {
                name,
                description,
                urls: if urls.is_empty() { None } else { Some(urls) },
            };
            let stack = api
                .update_stack(&stack_id, &update)
                .await
                .map_err(CliError::Api)?;
            print_json(&stack)
        }

        StacksCommands::Delete { stack_id, org_id } => {
            api.delete_stack(&stack_id, &org_id)
                .await
                .map_err(CliError::Api)?;
            println!("Deleted stack {stack_id}");
            Ok(())
        }

        StacksCommands::Export {
            stack_id,
            org_id,
            out,
        } => {
            let pkg = api
                .export_stack(&stack_id, &org_id)
                .await
                .map_err(CliError::Api)?;

            match out {
                Some(path) => {
                    let rendered = serde_json::to_string_pretty(&pkg)
                        .map_err(|e| CliError::Render(e.to_string()))?;
                    std::fs::write(&path, rendered).map_err(|e| CliError::FileWrite {
                        path: path.display().to_string(),
                        error: e,
                    })?;
                    println!("Exported stack {stack_id} to {}", path.display());
                    Ok(())
                }
                None => print_json(&pkg),
            }
        }
    }
}
