//! Errors raised while loading, parsing or writing translation files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {} at line {line}, column {column}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object at the top level of {}", path.display())]
    NotAnObject { path: PathBuf },

    #[error("Failed writing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            SyncError::NotFound { path }
            | SyncError::Read { path, .. }
            | SyncError::Parse { path, .. }
            | SyncError::NotAnObject { path }
            | SyncError::Write { path, .. } => path,
        }
    }
}

pub type SyncResult<T> = std::result::Result<T, SyncError>;
