//! Error type for file-backed matrix operations

use std::path::PathBuf;

use smtx_core::MatrixError;

/// Errors from loading, combining, or storing matrices on disk
///
/// Source failures (missing file, permissions) stay distinct from format
/// and arithmetic failures so callers can decide whether to re-prompt for
/// a path or reject the file contents.
#[derive(Debug)]
pub enum SmtxError {
    /// Decoding, bounds, or arithmetic failure from the core
    Format(MatrixError),
    /// The byte-stream source or sink could not be read or written
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for SmtxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SmtxError::Format(err) => write!(f, "{err}"),
            SmtxError::SourceUnavailable { path, source } => {
                write!(f, "cannot access {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SmtxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SmtxError::Format(err) => Some(err),
            SmtxError::SourceUnavailable { source, .. } => Some(source),
        }
    }
}

impl From<MatrixError> for SmtxError {
    fn from(err: MatrixError) -> Self {
        SmtxError::Format(err)
    }
}

/// Result type for file-backed matrix operations
pub type Result<T> = std::result::Result<T, SmtxError>;
