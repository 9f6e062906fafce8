//! Error types for the mdclean library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mdclean operations.
///
/// Only file-system-level and detector-internal failures become errors.
/// Content-level ambiguities (unknown encoding, unresolved placeholder)
/// degrade gracefully with a diagnostic instead.
#[derive(Debug, Error)]
pub enum MdcleanError {
    /// The file is missing or cannot be opened/read.
    #[error("cannot access '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unexpected failure inside the detection subsystem. Never used for the
    /// "no confident result" case, which falls back to UTF-8.
    #[error("encoding detection failed: {0}")]
    Detection(String),
}

impl MdcleanError {
    /// Wrap an I/O error with the path it occurred on.
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for mdclean operations.
pub type Result<T> = std::result::Result<T, MdcleanError>;
