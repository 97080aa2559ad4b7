//! Error types for SQL fragment generation.

use thiserror::Error;

/// Result type for SQL fragment generation.
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors for placeholder requests that cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// Placeholders cannot be grouped into empty tuples.
    #[error("placeholder group size must be at least 1, got {group_size}")]
    InvalidGroupSize { group_size: usize },

    /// Indexed placeholders are 1-based.
    #[error("indexed placeholders start at $1, got start index {start}")]
    InvalidStartIndex { start: usize },

    /// The last marker index does not fit in a `usize`.
    #[error("{count} placeholders starting at ${start} overflow the index range")]
    IndexOverflow { start: usize, count: usize },
}
