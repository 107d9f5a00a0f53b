//! Error types for record ingestion.

use thiserror::Error;

/// Errors raised when a caller hands the engine data that breaks its contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// A row is missing a required field or carries an unusable value.
    #[error("invalid input: {field} {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl DigestError {
    /// Builds a [`DigestError::InvalidInput`] for a required column absent from a row.
    pub(crate) fn missing_field(field: &str, row: usize) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: format!("is missing from row {row}"),
        }
    }
}
