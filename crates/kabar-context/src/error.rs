//! Error types for word-frequency analysis.

use thiserror::Error;

/// Errors reported to callers of the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A caller-supplied argument violates the analyzer's contract.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        /// Name of the offending argument.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A stopword language name is not recognized.
    #[error("unknown stopword language: {0}")]
    UnknownLanguage(String),
}

impl ContextError {
    /// Creates an `InvalidInput` error.
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
