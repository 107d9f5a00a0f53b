//! Error type for the dashboard facade.

use kabar_config::ConfigError;
use kabar_context::ContextError;
use kabar_digest::DigestError;
use thiserror::Error;

/// Errors surfaced by [`Dashboard`](crate::Dashboard).
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rows could not be ingested.
    #[error("ingestion error: {0}")]
    Digest(#[from] DigestError),

    /// Word-frequency analysis was called with bad arguments.
    #[error("analysis error: {0}")]
    Context(#[from] ContextError),
}

/// Result alias for dashboard operations.
pub type Result<T> = std::result::Result<T, Error>;
