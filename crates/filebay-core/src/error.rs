//! Outcome taxonomy for collection operations
//!
//! None of these are fatal. Every variant means "nothing changed"; the
//! presentation layer decides whether to tell the user.

use thiserror::Error;

use crate::types::FileId;

/// Why a requested operation had no effect
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOpError {
    /// The id does not belong to a live record
    #[error("No file with id {0} in the collection")]
    NotFound(FileId),

    /// Zero-length add or delete request
    #[error("Nothing to do: the request was empty")]
    EmptyBatch,

    /// No record ids left to hand out
    #[error("Record id space exhausted")]
    IdsExhausted,

    /// The confirmation prompt was rejected
    #[error("Operation cancelled by the user")]
    UserDeclined,
}

/// Result type for collection operations
pub type FileOpResult<T> = Result<T, FileOpError>;
