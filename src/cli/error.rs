//! Error types for CLI commands

use crate::export::ExportError;
use crate::import::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the CLI; data check results are never errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid config file {0}: {1}")]
    ConfigError(PathBuf, String),

    #[error("Schema parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),
}
