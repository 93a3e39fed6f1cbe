//! Unified error types for employee-record.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading a record from a text source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source unreadable: {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Path of the source that failed
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } => path,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for source reads
pub type SourceResult<T> = std::result::Result<T, SourceError>;
