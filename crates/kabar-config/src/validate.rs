//! Configuration validation.
//!
//! Reports non-fatal issues with a resolved configuration.

use std::{collections::HashSet, fmt};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No stopwords at all, so function words will top the frequency table.
    NoStopwords,
    /// A language is listed more than once.
    DuplicateLanguage {
        /// Name of the repeated language.
        language: String,
    },
    /// A kept word is also listed as an extra stopword, so it stays filtered.
    KeptWordIsStopword {
        /// The conflicting word.
        word: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStopwords => {
                write!(f, "no stopword languages or extra stopwords are configured")
            }
            Self::DuplicateLanguage { language } => {
                write!(f, "stopword language '{language}' is listed more than once")
            }
            Self::KeptWordIsStopword { word } => {
                write!(f, "'{word}' is both kept and listed as an extra stopword")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let analysis = &config.analysis;
    let mut warnings = Vec::new();

    if analysis.languages.is_empty() && analysis.stopwords.is_empty() {
        warnings.push(ConfigWarning::NoStopwords);
    }

    let mut seen = HashSet::new();
    for language in &analysis.languages {
        if !seen.insert(*language) {
            warnings.push(ConfigWarning::DuplicateLanguage {
                language: language.name().to_string(),
            });
        }
    }

    let extra: HashSet<String> = analysis.stopwords.iter().map(|w| w.to_lowercase()).collect();
    for word in &analysis.keep {
        if extra.contains(&word.to_lowercase()) {
            warnings.push(ConfigWarning::KeptWordIsStopword { word: word.clone() });
        }
    }

    warnings
}
