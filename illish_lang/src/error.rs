// Errors for the fallible edges around the converter.
//
// The conversion pipeline itself never fails. Only loading a config or a
// lexeme batch from disk, and the CLI's argument handling, can go wrong.

use std::path::PathBuf;

pub type IllishResult<T> = Result<T, IllishError>;

#[derive(Debug, thiserror::Error)]
pub enum IllishError {
    #[error("cannot read or write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

impl IllishError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// Read a file to a string, tagging failures with the path.
pub(crate) fn read_file(path: &std::path::Path) -> IllishResult<String> {
    std::fs::read_to_string(path).map_err(|e| IllishError::io(path, e))
}
