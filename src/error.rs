//! Error types for neviraller operations.
//!
//! This module defines [`NevirallerError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NevirallerError` for domain-specific failures that need distinct handling
//! - Use `anyhow::Error` (via `NevirallerError::Other`) for unexpected errors
//! - A declined prompt is an outcome, not an error, and never appears here
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for neviraller operations.
#[derive(Debug, Error)]
pub enum NevirallerError {
    /// One or more tools required by an operation are not on PATH.
    #[error("Required tools not found on PATH: {}", tools.join(", "))]
    ProbeUnavailable { tools: Vec<String> },

    /// Network request failed, timed out, or returned a non-success status.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The installed binary could not be executed to read its version.
    #[error("Failed to read version of '{binary}': {message}")]
    LocalProbe { binary: String, message: String },

    /// The package manager exited unsuccessfully.
    #[error("Failed to install '{package}' (exit code {code:?}): {stderr}")]
    Install {
        package: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Cloning the configuration repository failed.
    #[error("Failed to clone {url}: {message}")]
    Clone { url: String, message: String },

    /// A rename, remove, copy or move failed.
    #[error("Failed to {action} {path}: {message}")]
    Filesystem {
        action: String,
        path: PathBuf,
        message: String,
    },

    /// The user's home directory could not be determined.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// The settings file exists but could not be parsed.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A prompt could not be shown or answered.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NevirallerError {
    /// Build a [`NevirallerError::Filesystem`] from an IO failure.
    pub fn filesystem(action: &str, path: impl Into<PathBuf>, err: impl ToString) -> Self {
        Self::Filesystem {
            action: action.to_string(),
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for neviraller operations.
pub type Result<T> = std::result::Result<T, NevirallerError>;
