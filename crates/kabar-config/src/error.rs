//! Error types for kabar configuration.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to render settings as TOML.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ser::Error),

    /// A stopword language is not supported.
    #[error("unknown stopword language: {name}")]
    UnknownLanguage {
        /// The name as written in the file.
        name: String,
    },

    /// A setting has a value the engine cannot use.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Dotted name of the setting.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
