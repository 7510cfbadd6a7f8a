//! Data access error types.

use thiserror::Error;

/// Errors returned by [`crate::TableSource`] and [`crate::SheetAdapter`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Remote source unreachable, or authentication rejected.
    #[error("Source unavailable: {0}")]
    Unavailable(String),
    /// Requested column is not among the current headers.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;
