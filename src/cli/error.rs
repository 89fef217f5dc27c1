//! CLI-specific error types

use crate::config::ConfigError;
use crate::pipeline::MigrationError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("{0} already exists (use --force to overwrite)")]
    FileExists(PathBuf),

    #[error("Schema validation error: {0}")]
    ValidationError(String),

    #[error("Validation failed for {failed} of {total} files")]
    ValidationFailed { failed: usize, total: usize },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("{0}")]
    Migration(#[from] MigrationError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
