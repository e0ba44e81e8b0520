//! Error types for helpmd.
//!
//! Library crates use [`HelpmdError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Nothing is recovered locally: the first error aborts the run, and
//! any files already written stay on disk.

use std::path::PathBuf;

/// Top-level error type for all helpmd operations.
#[derive(Debug, thiserror::Error)]
pub enum HelpmdError {
    /// Filesystem I/O error (missing input header, unwritable output).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Header scanning error.
    #[error("parse error: {message}")]
    Parse { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, HelpmdError>;

impl HelpmdError {
    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
