//! Stopword filtering for word-frequency analysis.
//!
//! The analyzer never hardcodes a list. Callers build a [`Stopwords`] set from their own
//! words, from the ISO lists shipped with the `stop-words` crate, or both.

use std::{collections::HashSet, fmt, str::FromStr};

use stop_words::LANGUAGE;

use crate::ContextError;

/// A language whose standard stopword list can be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Bahasa Indonesia.
    Indonesian,
    /// English.
    English,
    /// Bahasa Melayu.
    Malay,
    /// Dutch.
    Dutch,
    /// French.
    French,
    /// German.
    German,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Spanish.
    Spanish,
}

impl Language {
    /// All supported languages.
    pub const ALL: &[Self] = &[
        Self::Indonesian,
        Self::English,
        Self::Malay,
        Self::Dutch,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Portuguese,
        Self::Spanish,
    ];

    /// Returns the lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Indonesian => "indonesian",
            Self::English => "english",
            Self::Malay => "malay",
            Self::Dutch => "dutch",
            Self::French => "french",
            Self::German => "german",
            Self::Italian => "italian",
            Self::Portuguese => "portuguese",
            Self::Spanish => "spanish",
        }
    }

    /// Returns the standard stopword list for this language.
    fn words(self) -> &'static [&'static str] {
        let language = match self {
            Self::Indonesian => LANGUAGE::Indonesian,
            Self::English => LANGUAGE::English,
            Self::Malay => LANGUAGE::Malay,
            Self::Dutch => LANGUAGE::Dutch,
            Self::French => LANGUAGE::French,
            Self::German => LANGUAGE::German,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Spanish => LANGUAGE::Spanish,
        };
        stop_words::get(language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ContextError;

    /// Parses a language name or ISO 639-1 code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let language = match name.as_str() {
            "indonesian" | "id" => Self::Indonesian,
            "english" | "en" => Self::English,
            "malay" | "ms" => Self::Malay,
            "dutch" | "nl" => Self::Dutch,
            "french" | "fr" => Self::French,
            "german" | "de" => Self::German,
            "italian" | "it" => Self::Italian,
            "portuguese" | "pt" => Self::Portuguese,
            "spanish" | "es" => Self::Spanish,
            _ => return Err(ContextError::UnknownLanguage(s.to_string())),
        };
        Ok(language)
    }
}

/// A case-insensitive stopword set.
///
/// Words are stored lower-cased, so lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    /// Lower-cased stopwords.
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates an empty set that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from caller-supplied words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stopwords = Self::empty();
        stopwords.extend(words);
        stopwords
    }

    /// Creates a set from the standard lists of the given languages.
    pub fn for_languages(languages: &[Language]) -> Self {
        let mut stopwords = Self::empty();
        for language in languages {
            stopwords.extend(language.words());
        }
        stopwords
    }

    /// Adds words to the set.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() {
                self.words.insert(word.to_lowercase());
            }
        }
    }

    /// Removes words from the set, so they are counted again.
    pub fn remove<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().trim().to_lowercase());
        }
    }

    /// Checks if a term is a stopword, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
