//! Error types for otelcol-fs

use std::path::PathBuf;

/// Result type for otelcol-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in otelcol-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fragment name {name:?}: {reason}")]
    InvalidFragmentName { name: String, reason: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFragmentName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
