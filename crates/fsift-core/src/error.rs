//! Error types for fsift.

use std::path::PathBuf;
use thiserror::Error;

/// fsift error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The walk root (or, when configured, a directory below it) could not
    /// be read.
    #[error("Filesystem error at {}: {source}", .path.display())]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error belongs to the filesystem class (bad or unreadable
    /// root) rather than configuration or output.
    pub fn is_filesystem(&self) -> bool {
        matches!(self, Error::FileSystem { .. } | Error::NotADirectory(_))
    }
}

/// Result type alias for fsift operations.
pub type Result<T> = std::result::Result<T, Error>;
