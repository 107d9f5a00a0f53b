//! Word-frequency counting.
//!
//! Text is split into runs of word characters (Unicode alphanumerics and `_`). Runs shorter
//! than the minimum length are dropped, the rest are lower-cased, filtered against the
//! stopword set, and counted. Ranking is by count, highest first, with ties kept in the
//! order the terms were first seen.

use std::collections::HashMap;

use crate::{ContextError, Stopwords};

/// Default minimum term length, in characters.
pub const MIN_TERM_LENGTH: usize = 3;

/// A term and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequencyEntry {
    /// The lower-cased term.
    pub term: String,
    /// Number of occurrences, always at least 1.
    pub count: usize,
}

impl WordFrequencyEntry {
    /// Creates a new entry.
    pub fn new(term: impl Into<String>, count: usize) -> Self {
        Self {
            term: term.into(),
            count,
        }
    }
}

/// Returns true for characters that belong to a word.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Tokenizes text into lower-cased word runs of at least `min_length` characters.
pub fn tokenize(text: &str, min_length: usize) -> impl Iterator<Item = String> + '_ {
    text.split(|ch: char| !is_word_char(ch))
        .filter(move |run| run.chars().count() >= min_length)
        .map(str::to_lowercase)
}

/// Counts and ranks terms across a corpus.
#[derive(Debug, Clone)]
pub struct WordCounter<'a> {
    /// Terms to skip.
    stopwords: &'a Stopwords,
    /// Minimum term length, in characters.
    min_length: usize,
}

impl<'a> WordCounter<'a> {
    /// Creates a counter with the default minimum term length.
    pub fn new(stopwords: &'a Stopwords) -> Self {
        Self {
            stopwords,
            min_length: MIN_TERM_LENGTH,
        }
    }

    /// Sets the minimum term length. Values below 1 are treated as 1.
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length.max(1);
        self
    }

    /// Counts every term in the corpus, ranked by count with first-seen tie-break.
    pub fn count<I, S>(&self, texts: I) -> Vec<WordFrequencyEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<WordFrequencyEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for text in texts {
            for token in tokenize(text.as_ref(), self.min_length) {
                if self.stopwords.contains(&token) {
                    continue;
                }
                match index.get(&token) {
                    Some(&slot) => entries[slot].count += 1,
                    None => {
                        index.insert(token.clone(), entries.len());
                        entries.push(WordFrequencyEntry::new(token, 1));
                    }
                }
            }
        }

        // Stable sort keeps first-encounter order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }

    /// Returns the `top_k` most frequent terms.
    ///
    /// A `top_k` of zero is a caller error.
    pub fn top<I, S>(&self, texts: I, top_k: usize) -> Result<Vec<WordFrequencyEntry>, ContextError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if top_k == 0 {
            return Err(ContextError::invalid_input("top_k", "must be at least 1"));
        }
        let mut entries = self.count(texts);
        entries.truncate(top_k);
        Ok(entries)
    }
}

/// Ranks the `top_k` most frequent non-stopword terms of at least three characters.
pub fn word_frequencies<I, S>(
    texts: I,
    stopwords: &Stopwords,
    top_k: usize,
) -> Result<Vec<WordFrequencyEntry>, ContextError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    WordCounter::new(stopwords).top(texts, top_k)
}

#[cfg(test)]
mod test {
    use super::*;

    fn entries(pairs: &[(&str, usize)]) -> Vec<WordFrequencyEntry> {
        pairs
            .iter()
            .map(|(term, count)| WordFrequencyEntry::new(*term, *count))
            .collect()
    }

    #[test]
    fn tokenize_drops_short_runs() {
        let tokens: Vec<_> = tokenize("a ab abc abcd", 3).collect();
        assert_eq!(tokens, vec!["abc", "abcd"]);
    }

    #[test]
    fn tokenize_splits_on_punctuation() {
        let tokens: Vec<_> = tokenize("Harga BBM naik; warga-protes (lagi)!", 3).collect();
        assert_eq!(tokens, vec!["harga", "bbm", "naik", "warga", "protes", "lagi"]);
    }

    #[test]
    fn tokenize_keeps_digits_and_underscores() {
        let tokens: Vec<_> = tokenize("pemilu_2024 di 2024", 3).collect();
        assert_eq!(tokens, vec!["pemilu_2024", "2024"]);
    }

    #[test]
    fn tokenize_counts_characters_not_bytes() {
        let tokens: Vec<_> = tokenize("été à öl", 3).collect();
        assert_eq!(tokens, vec!["été"]);
    }

    #[test]
    fn ranks_by_count_then_first_seen() {
        let sw = Stopwords::empty();
        let result = word_frequencies(["kopi kopi teh air"], &sw, 2).unwrap();
        assert_eq!(result, entries(&[("kopi", 2), ("teh", 1)]));
    }

    #[test]
    fn ties_keep_first_encounter_across_texts() {
        let sw = Stopwords::empty();
        let result = word_frequencies(["zeta alpha", "beta zeta alpha beta"], &sw, 10).unwrap();
        assert_eq!(
            result,
            entries(&[("zeta", 2), ("alpha", 2), ("beta", 2)])
        );
    }

    #[test]
    fn counting_ignores_case() {
        let sw = Stopwords::empty();
        let result = word_frequencies(["Banjir BANJIR banjir"], &sw, 5).unwrap();
        assert_eq!(result, entries(&[("banjir", 3)]));
    }

    #[test]
    fn stopwords_are_skipped() {
        let sw = Stopwords::from_words(["yang", "dan"]);
        let result =
            word_frequencies(["banjir yang besar dan banjir yang lama"], &sw, 10).unwrap();
        assert_eq!(result, entries(&[("banjir", 2), ("besar", 1), ("lama", 1)]));
    }

    #[test]
    fn zero_top_k_is_invalid() {
        let sw = Stopwords::empty();
        let err = word_frequencies(["kopi"], &sw, 0).unwrap_err();
        assert_eq!(
            err,
            ContextError::InvalidInput {
                field: "top_k",
                reason: "must be at least 1".into()
            }
        );
    }

    #[test]
    fn empty_corpus_yields_nothing() {
        let sw = Stopwords::empty();
        assert!(word_frequencies(Vec::<String>::new(), &sw, 5).unwrap().is_empty());
        assert!(word_frequencies([""], &sw, 5).unwrap().is_empty());
    }

    #[test]
    fn custom_min_length() {
        let sw = Stopwords::empty();
        let counter = WordCounter::new(&sw).with_min_length(5);
        let result = counter.count(["kopi susu gula aren manis"]);
        assert_eq!(result, entries(&[("manis", 1)]));
    }

    #[test]
    fn zero_min_length_never_counts_empty_runs() {
        let sw = Stopwords::empty();
        let counter = WordCounter::new(&sw).with_min_length(0);
        let result = counter.count(["  a,,b  "]);
        assert_eq!(result, entries(&[("a", 1), ("b", 1)]));
    }

    #[test]
    fn deterministic() {
        let sw = Stopwords::empty();
        let texts = ["satu dua tiga dua tiga tiga empat lima enam"];
        let first = word_frequencies(texts, &sw, 4).unwrap();
        let second = word_frequencies(texts, &sw, 4).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            entries(&[("tiga", 3), ("dua", 2), ("satu", 1), ("empat", 1)])
        );
    }
}
