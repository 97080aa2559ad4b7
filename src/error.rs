//! Error types for the toolkit facade.

// Fields are read by the derive macros.
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use strmangle_case::CaseError;
use strmangle_sql::SqlError;

/// Result type for toolkit operations.
pub type MangleResult<T> = Result<T, MangleError>;

/// Errors raised by the toolkit.
#[derive(Error, Debug, Diagnostic)]
pub enum MangleError {
    /// Two slices meant to be zipped element-wise differ in length.
    #[error("cannot join slices of different lengths ({left} and {right})")]
    #[diagnostic(
        code(strmangle::length_mismatch),
        help("column and value lists must be paired one-to-one")
    )]
    LengthMismatch {
        /// Length of the left slice.
        left: usize,
        /// Length of the right slice.
        right: usize,
    },

    /// A struct tag name that cannot be emitted.
    #[error("invalid tag `{name}`: {reason}")]
    #[diagnostic(code(strmangle::invalid_tag))]
    InvalidTag {
        /// The rejected tag name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Naming engine setup failed.
    #[error(transparent)]
    #[diagnostic(code(strmangle::case))]
    Case(#[from] CaseError),

    /// SQL fragment generation failed.
    #[error(transparent)]
    #[diagnostic(code(strmangle::sql))]
    Sql(#[from] SqlError),

    /// Error reading a file.
    #[error("failed to read file: {path}")]
    #[diagnostic(code(strmangle::io_error))]
    Io {
        /// The file that could not be read.
        path: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML")]
    #[diagnostic(code(strmangle::toml_error))]
    Toml {
        /// The underlying error.
        #[source]
        source: toml::de::Error,
    },
}

impl MangleError {
    /// Create an invalid tag error.
    pub fn invalid_tag(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTag {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
