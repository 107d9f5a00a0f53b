//! Configuration system for kabar.
//!
//! kabar reads an optional `kabar.toml`. Every key has a default, so an absent file or an
//! empty one yields the stock configuration:
//!
//! ```toml
//! [analysis]
//! top_k = 100
//! min_word_length = 3
//! languages = ["indonesian", "english"]
//! stopwords = []
//! keep = []
//!
//! [query]
//! cache_size = 64
//! ```

#![warn(missing_docs)]

mod error;
mod parse;
mod validate;

use std::path::Path;

pub use error::ConfigError;
use kabar_context::{Language, Stopwords};
pub use parse::{
    RawAnalysisSettings, RawConfig, RawQuerySettings, parse_config_file, parse_config_str,
};
use serde::Serialize;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Name of the configuration file looked up by [`Config::load`].
pub const CONFIG_FILENAME: &str = "kabar.toml";

/// Default number of terms in the word-frequency table.
pub const DEFAULT_TOP_K: usize = 100;

/// Default shortest counted word, in characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Default number of memoized queries.
pub const DEFAULT_QUERY_CACHE_SIZE: usize = 64;

/// Resolved configuration for kabar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Word-frequency and stopword settings.
    pub analysis: AnalysisSettings,
    /// Query handling settings.
    pub query: QuerySettings,
}

impl Config {
    /// Loads `kabar.toml` from `dir`, or returns the defaults if there is none.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Loads configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_raw(parse_config_file(path)?)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::from_raw(parse_config_str(contents, Path::new(CONFIG_FILENAME))?)
    }

    /// Resolves a raw configuration, filling in defaults and checking values.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = AnalysisSettings::default();
        let analysis = raw.analysis.unwrap_or_default();

        let top_k = analysis.top_k.unwrap_or(defaults.top_k);
        if top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.top_k",
                reason: "must be at least 1".into(),
            });
        }

        let min_word_length = analysis.min_word_length.unwrap_or(defaults.min_word_length);
        if min_word_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.min_word_length",
                reason: "must be at least 1".into(),
            });
        }

        let languages = match analysis.languages {
            Some(names) => names
                .iter()
                .map(|name| {
                    name.parse::<Language>()
                        .map_err(|_| ConfigError::UnknownLanguage { name: name.clone() })
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => defaults.languages,
        };

        let query = raw.query.unwrap_or_default();

        Ok(Self {
            analysis: AnalysisSettings {
                top_k,
                min_word_length,
                languages,
                stopwords: analysis.stopwords.unwrap_or_default(),
                keep: analysis.keep.unwrap_or_default(),
            },
            query: QuerySettings {
                cache_size: query.cache_size.unwrap_or(DEFAULT_QUERY_CACHE_SIZE),
            },
        })
    }

    /// Builds the stopword set: language lists, minus kept words, plus extra stopwords.
    pub fn stopwords(&self) -> Stopwords {
        let analysis = &self.analysis;
        let mut stopwords = Stopwords::for_languages(&analysis.languages);
        stopwords.remove(&analysis.keep);
        stopwords.extend(&analysis.stopwords);
        stopwords
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML, in the same shape as `kabar.toml`.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableConfig {
            analysis: SerializableAnalysisSettings::from(&self.analysis),
            query: self.query.clone(),
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Word-frequency and stopword settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSettings {
    /// Number of terms in the word-frequency table.
    pub top_k: usize,
    /// Shortest word counted, in characters.
    pub min_word_length: usize,
    /// Languages whose standard stopword lists are loaded.
    pub languages: Vec<Language>,
    /// Extra stopwords.
    pub stopwords: Vec<String>,
    /// Words removed from the language lists.
    pub keep: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            languages: vec![Language::Indonesian, Language::English],
            stopwords: Vec::new(),
            keep: Vec::new(),
        }
    }
}

/// Query handling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuerySettings {
    /// Number of parsed queries to memoize; 0 disables the memo.
    pub cache_size: usize,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableConfig {
    /// Word-frequency and stopword settings.
    analysis: SerializableAnalysisSettings,
    /// Query handling settings.
    query: QuerySettings,
}

/// Analysis settings with languages rendered by name.
#[derive(Serialize)]
struct SerializableAnalysisSettings {
    /// Number of terms in the word-frequency table.
    top_k: usize,
    /// Shortest word counted.
    min_word_length: usize,
    /// Language names.
    languages: Vec<&'static str>,
    /// Extra stopwords.
    stopwords: Vec<String>,
    /// Kept words.
    keep: Vec<String>,
}

impl From<&AnalysisSettings> for SerializableAnalysisSettings {
    fn from(analysis: &AnalysisSettings) -> Self {
        Self {
            top_k: analysis.top_k,
            min_word_length: analysis.min_word_length,
            languages: analysis.languages.iter().map(|l| l.name()).collect(),
            stopwords: analysis.stopwords.clone(),
            keep: analysis.keep.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults() {
        let analysis = AnalysisSettings::default();
        assert_eq!(analysis.top_k, 100);
        assert_eq!(analysis.min_word_length, 3);
        assert_eq!(analysis.languages, vec![Language::Indonesian, Language::English]);
        assert!(analysis.stopwords.is_empty());
        assert!(analysis.keep.is_empty());
    }

    #[test]
    fn test_query_defaults() {
        assert_eq!(QuerySettings::default().cache_size, 64);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml_str("[analysis]\ntop_k = 10\n").unwrap();
        assert_eq!(config.analysis.top_k, 10);
        assert_eq!(config.analysis.min_word_length, 3);
        assert_eq!(config.query.cache_size, 64);
    }

    #[test]
    fn test_languages_accept_codes() {
        let config = Config::from_toml_str("[analysis]\nlanguages = [\"id\", \"Malay\"]\n").unwrap();
        assert_eq!(config.analysis.languages, vec![Language::Indonesian, Language::Malay]);
    }

    #[test]
    fn test_unknown_language() {
        let err = Config::from_toml_str("[analysis]\nlanguages = \"klingon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage { ref name } if name == "klingon"));
    }

    #[test]
    fn test_zero_top_k_is_invalid() {
        let err = Config::from_toml_str("[analysis]\ntop_k = 0\n").unwrap_err();
        assert_eq!(err.to_string(), "invalid value for analysis.top_k: must be at least 1");
    }

    #[test]
    fn test_zero_min_word_length_is_invalid() {
        let err = Config::from_toml_str("[analysis]\nmin_word_length = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "analysis.min_word_length",
                ..
            }
        ));
    }

    #[test]
    fn test_stopwords_combine_languages_extras_and_keep() {
        let config = Config::from_toml_str(
            r#"
[analysis]
languages = "indonesian"
stopwords = ["Berita"]
keep = ["tidak"]
"#,
        )
        .unwrap();
        let stopwords = config.stopwords();
        assert!(stopwords.contains("yang"));
        assert!(stopwords.contains("berita"));
        assert!(!stopwords.contains("tidak"));
    }

    #[test]
    fn test_no_languages_means_only_extras() {
        let config =
            Config::from_toml_str("[analysis]\nlanguages = []\nstopwords = [\"kopi\"]\n").unwrap();
        assert_eq!(config.stopwords().len(), 1);
    }

    #[test]
    fn test_settings_to_toml() {
        let toml = Config::default().settings_to_toml().unwrap();

        assert!(toml.contains("[analysis]"));
        assert!(toml.contains("[query]"));
        assert!(toml.contains("top_k = 100"));
        assert!(toml.contains("cache_size = 64"));

        // The rendered settings load back to the same configuration.
        assert_eq!(Config::from_toml_str(&toml).unwrap(), Config::default());
    }
}
