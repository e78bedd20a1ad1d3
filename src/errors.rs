//! Repository errors
//!
//! Every failure the core can surface is a variant of [`CvsError`]. None of them
//! are retried; each one is terminal for the invocation that raised it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type CvsResult<T> = Result<T, CvsError>;

/// Errors raised by repository operations
#[derive(Error, Debug)]
pub enum CvsError {
    /// `init` ran in a directory that already holds a repository
    #[error("a repository is already initialized in {}", .0.display())]
    RepositoryAlreadyExists(PathBuf),

    /// No repository metadata directory was found
    #[error("could not find a repository in {}", .0.display())]
    RepositoryNotFound(PathBuf),

    /// Stage target is missing or lies outside the repository root
    #[error("invalid path for staging: {}", .0.display())]
    InvalidPath(PathBuf),

    /// The index file is missing
    #[error("could not find the index file at {}", .0.display())]
    IndexNotFound(PathBuf),

    /// A blob, tree or commit object is missing from the store
    #[error("object not found: {0}")]
    ObjectNotFound(String),

    /// Unknown checkout target
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    /// Source file of a blob is missing
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A persisted object could not be parsed
    #[error("corrupt object {hash}: {reason}")]
    CorruptObject { hash: String, reason: String },

    /// An index line could not be parsed
    #[error("corrupt index line: {0:?}")]
    CorruptIndex(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CvsError {
    pub fn corrupt_object<H: Into<String>, R: Into<String>>(hash: H, reason: R) -> Self {
        CvsError::CorruptObject {
            hash: hash.into(),
            reason: reason.into(),
        }
    }

    /// Maps a `NotFound` I/O error onto a typed error, leaving others as `Io`
    pub(crate) fn from_io_or(error: std::io::Error, not_found: impl FnOnce() -> CvsError) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => not_found(),
            _ => CvsError::Io(error),
        }
    }
}
