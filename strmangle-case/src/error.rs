//! Error types for the naming engine.

use thiserror::Error;

/// Result type for case conversion setup.
pub type CaseResult<T> = Result<T, CaseError>;

/// Errors raised while configuring the naming engine.
///
/// Conversions themselves are total; only dictionary construction can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// An acronym entry that cannot match a token.
    #[error("invalid acronym `{acronym}`: {message}")]
    InvalidAcronym { acronym: String, message: String },
}

impl CaseError {
    /// Create an invalid acronym error.
    pub fn invalid_acronym(acronym: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAcronym {
            acronym: acronym.into(),
            message: message.into(),
        }
    }
}
