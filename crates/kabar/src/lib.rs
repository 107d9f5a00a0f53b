//! kabar: query and aggregation engine for news-monitoring dashboards.
//!
//! A [`Dashboard`] owns the current record set and the analysis settings. Each call to
//! [`Dashboard::view`] filters the records by sentiment, label and a boolean search query,
//! then rolls the survivors up into topic summaries and a word-frequency table.
//!
//! ```
//! use kabar::{Config, Dashboard, FilterOptions, Record};
//!
//! let mut dashboard = Dashboard::new(&Config::default());
//! dashboard.replace_records(vec![
//!     Record::new("Subsidi rumah diperluas", "Kuota subsidi rumah ditambah")
//!         .with_sentiment("positive"),
//!     Record::new("Utang negara naik", "Subsidi energi membebani anggaran")
//!         .with_sentiment("negative"),
//! ]);
//!
//! let view = dashboard
//!     .view(&FilterOptions::new().query("subsidi -utang"))
//!     .unwrap();
//! assert_eq!(view.matched, 2);
//! assert_eq!(view.topics[0].title, "Subsidi rumah diperluas");
//! assert_eq!(view.words[0].term, "subsidi");
//! ```

#![warn(missing_docs)]

mod dashboard;
mod error;
mod memo;

pub use dashboard::{Corpus, Dashboard, DashboardView, FilterOptions};
pub use error::{Error, Result};
pub use kabar_config::Config;
pub use kabar_context::{Language, Stopwords, WordFrequencyEntry, word_frequencies};
pub use kabar_digest::{
    DigestError, RawCell, RawRecord, Record, RecordFilter, Sentiment, SentimentTotals, Tier,
    TopicSummary, aggregate, ingest, ingest_lenient,
};
pub use kabar_query::{QueryNode, Searchable, matches, parse};
pub use memo::QueryMemo;
