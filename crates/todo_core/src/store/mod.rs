//! Whole-list JSON file persistence.
//!
//! # Responsibility
//! - Save and load a complete `TodoList` as one JSON array.
//! - Map file-system and parse failures to semantic errors.
//!
//! # Invariants
//! - `load` reports `NotFound` before any read or parse attempt.
//! - A file that fails to parse never yields a partial list.
//! - Writes are plain overwrites; no temp-file rename is performed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod json_file;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for list save/load operations.
#[derive(Debug)]
pub enum StoreError {
    /// `load` was called with a path that does not exist.
    NotFound(PathBuf),
    /// Reading or writing the file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not a JSON array of todo items.
    Format { path: PathBuf, message: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Io { path, source } => {
                write!(f, "i/o failure on `{}`: {source}", path.display())
            }
            Self::Format { path, message } => {
                write!(f, "invalid todo list file `{}`: {message}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Format { .. } => None,
        }
    }
}

impl StoreError {
    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Io { .. } => "io_failed",
            Self::Format { .. } => "format_invalid",
        }
    }
}
