//! Caller-owned dashboard state and the filtered view over it.

use std::path::Path;

use kabar_config::{AnalysisSettings, Config};
use kabar_context::{Stopwords, WordCounter, WordFrequencyEntry};
use kabar_digest::{
    DigestError, RawRecord, Record, RecordFilter, Sentiment, SentimentTotals, TopicSummary,
    aggregate, ingest, ingest_lenient, label_options, sentiment_options, sentiment_totals,
};
use kabar_query::QueryNode;
use tracing::{debug, warn};

use crate::{Result, memo::QueryMemo};

/// Which records feed the word-frequency table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Corpus {
    /// Only the records that pass the filter.
    #[default]
    Matched,
    /// Every loaded record.
    All,
}

/// Filter criteria for one dashboard view. The default selects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Raw search query.
    pub query: String,
    /// Required sentiment.
    pub sentiment: Option<Sentiment>,
    /// Required label.
    pub label: Option<String>,
    /// Records used for the word table.
    pub corpus: Corpus,
    /// Word table size; the configured size when unset.
    pub top_k: Option<usize>,
}

impl FilterOptions {
    /// Creates options that select every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Requires a sentiment.
    #[must_use]
    pub fn sentiment(mut self, sentiment: impl Into<Sentiment>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    /// Requires a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Chooses the word-table corpus.
    #[must_use]
    pub fn corpus(mut self, corpus: Corpus) -> Self {
        self.corpus = corpus;
        self
    }

    /// Overrides the word-table size.
    #[must_use]
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }
}

/// Everything a dashboard renders for one set of filter options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Number of records that passed the filter.
    pub matched: usize,
    /// Sentiment counts over the matched records.
    pub totals: SentimentTotals,
    /// Topic rows, largest first.
    pub topics: Vec<TopicSummary>,
    /// Ranked word-frequency table.
    pub words: Vec<WordFrequencyEntry>,
    /// Label choices over every loaded record.
    pub label_options: Vec<String>,
    /// Sentiment choices over every loaded record.
    pub sentiment_options: Vec<String>,
}

/// The current record set plus the settings used to analyze it.
///
/// Records are replaced wholesale; nothing is shared between dashboards.
#[derive(Debug)]
pub struct Dashboard {
    /// Loaded records.
    records: Vec<Record>,
    /// Stopwords for the word table.
    stopwords: Stopwords,
    /// Word-table settings.
    analysis: AnalysisSettings,
    /// Parsed query memo.
    queries: QueryMemo,
}

impl Dashboard {
    /// Creates an empty dashboard from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            records: Vec::new(),
            stopwords: config.stopwords(),
            analysis: config.analysis.clone(),
            queries: QueryMemo::new(config.query.cache_size),
        }
    }

    /// Creates an empty dashboard configured from `kabar.toml` in `dir`, if present.
    pub fn from_config_dir(dir: &Path) -> Result<Self> {
        let config = Config::load(dir)?;
        for warning in config.validate() {
            warn!(%warning, "configuration warning");
        }
        Ok(Self::new(&config))
    }

    /// Replaces the record set with freshly ingested rows.
    ///
    /// On error the previous records are kept. Returns the number of records loaded.
    pub fn load_rows<I>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let records = ingest(rows)?;
        self.replace_records(records);
        Ok(self.records.len())
    }

    /// Replaces the record set with every valid row, skipping the rest.
    ///
    /// Returns the number of records loaded and the errors of the skipped rows.
    pub fn load_rows_lenient<I>(&mut self, rows: I) -> (usize, Vec<DigestError>)
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let (records, skipped) = ingest_lenient(rows);
        self.replace_records(records);
        (self.records.len(), skipped)
    }

    /// Replaces the record set.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        debug!(records = records.len(), "replacing dashboard records");
        self.records = records;
    }

    /// Returns the loaded records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the stopword set.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Returns the word-table settings.
    pub fn analysis(&self) -> &AnalysisSettings {
        &self.analysis
    }

    /// Parses a query through the memo.
    pub fn parse_query(&mut self, query: &str) -> QueryNode {
        self.queries.parse(query)
    }

    /// Computes the view for a set of filter options.
    pub fn view(&mut self, options: &FilterOptions) -> Result<DashboardView> {
        let filter = RecordFilter {
            sentiment: options.sentiment.clone(),
            label: options.label.as_ref().map(|label| label.trim().to_string()),
            query: self.queries.parse(options.query.trim()),
        };
        let matched = filter.apply(&self.records);

        let counter =
            WordCounter::new(&self.stopwords).with_min_length(self.analysis.min_word_length);
        let top_k = options.top_k.unwrap_or(self.analysis.top_k);
        let words = match options.corpus {
            Corpus::Matched => counter.top(matched.iter().copied().flat_map(word_sources), top_k)?,
            Corpus::All => counter.top(self.records.iter().flat_map(word_sources), top_k)?,
        };

        let view = DashboardView {
            matched: matched.len(),
            totals: sentiment_totals(matched.iter().copied()),
            topics: aggregate(matched.iter().copied()),
            words,
            label_options: label_options(&self.records),
            sentiment_options: sentiment_options(&self.records),
        };
        debug!(
            query = %options.query,
            matched = view.matched,
            topics = view.topics.len(),
            "computed dashboard view"
        );
        Ok(view)
    }
}

/// Text fields counted for the word table.
fn word_sources(record: &Record) -> [&str; 2] {
    [record.title.as_str(), record.body.as_str()]
}
