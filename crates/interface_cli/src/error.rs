//! CLI error handling

use std::path::PathBuf;

use domain_statement::StatementError;
use thiserror::Error;

/// Errors raised while loading input data or producing statements
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Statement(#[from] StatementError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
