//! Error types for installcheck operations.
//!
//! This module defines [`VerifyError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Check failures are never errors: they are recorded in the report
//! - Use `VerifyError` for problems that stop a run before checks start
//!   (configuration) or that a caller must convert into a failed check
//!   (process spawning)
//! - Use `anyhow::Error` (via `VerifyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for installcheck operations.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A subprocess could not be started or waited on.
    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for installcheck operations.
pub type Result<T> = std::result::Result<T, VerifyError>;
