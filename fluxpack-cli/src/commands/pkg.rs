//! `pkg` subcommands for creating and applying package documents.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde_json::Value;

use fluxpack::packages::{PackagesApi, PkgApply, PkgCreate};
use fluxpack::transport::Transport;

use super::print_json;
use crate::error::CliError;

/// Pkg subcommands.
#[derive(Subcommand)]
pub enum PkgCommands {
    /// Create a package definition on the server
    Create {
        /// Package document (JSON or YAML)
        #[arg(long, short)]
        file: PathBuf,
    },

    /// Apply a package, or preview its effects with a dry-run document
    Apply {
        /// Apply document (JSON or YAML)
        #[arg(long, short)]
        file: PathBuf,
    },
}

/// Run a pkg subcommand.
pub async fn run<T: Transport>(cmd: PkgCommands, api: &PackagesApi<T>) -> Result<(), CliError> {
    match cmd {
        PkgCommands::Create { file } => {
            let doc = load_document(&file)?;
            let pkg = api.create_pkg(&PkgCreate(doc)).await.map_err(CliError::Api)?;
            print_json(&pkg)
        }
        PkgCommands::Apply { file } => {
            let doc = load_document(&file)?;
            let summary = api.apply_pkg(&PkgApply(doc)).await.map_err(CliError::Api)?;
            print_json(&summary)
        }
    }
}

/// Load a package document, selecting the parser by file extension.
/// `.yml`/`.yaml` parse as YAML; everything else as JSON.
fn load_document(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::FileRead {
        path: path.display().to_string(),
        error: e,
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    );

    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| CliError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| CliError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fluxpack-test-{name}"));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json_document() {
        let path = write_temp("pkg.json", r#"{"resources": [{"kind": "Bucket"}]}"#);
        let doc = load_document(&path).unwrap();
        assert_eq!(doc["resources"][0]["kind"], "Bucket");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_yaml_document() {
        let path = write_temp("pkg.yaml", "resources:\n  - kind: Bucket\n");
        let doc = load_document(&path).unwrap();
        assert_eq!(doc["resources"][0]["kind"], "Bucket");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_document(Path::new("/nonexistent/pkg.json")).unwrap_err();
        assert!(matches!(err, CliError::FileRead { .. }));
    }

    #[test]
    fn test_malformed_json_reports_parse_error() {
        let path = write_temp("bad.json", "{not json");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        std::fs::remove_file(path).ok();
    }
}
