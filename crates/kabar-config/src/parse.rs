//! Configuration file parsing.
//!
//! Parses `kabar.toml` into a `RawConfig` that keeps every field optional, so that missing
//! keys fall back to defaults when the config is resolved.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// Word-frequency and stopword settings.
    pub analysis: Option<RawAnalysisSettings>,
    /// Query handling settings.
    pub query: Option<RawQuerySettings>,
}

/// Raw `[analysis]` section.
///
/// List-valued keys accept either a single string or an array of strings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawAnalysisSettings {
    /// Number of terms in the word-frequency table.
    pub top_k: Option<usize>,
    /// Shortest word counted, in characters.
    pub min_word_length: Option<usize>,
    /// Languages whose standard stopword lists are loaded.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub languages: Option<Vec<String>>,
    /// Extra stopwords.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub stopwords: Option<Vec<String>>,
    /// Words removed from the language lists so they are counted.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub keep: Option<Vec<String>>,
}

/// Raw `[query]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawQuerySettings {
    /// Number of parsed queries to memoize; 0 disables the memo.
    pub cache_size: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
