//! Typed news records and their rollup into topic summaries.
//!
//! Loosely typed rows are coerced into [`Record`]s by [`ingest`], narrowed with a
//! [`RecordFilter`], and grouped by title with [`aggregate`]:
//!
//! ```
//! use kabar_digest::{Record, RecordFilter, aggregate};
//! use kabar_query::parse;
//!
//! let records = vec![
//!     Record::new("Harga BBM naik", "Subsidi dipangkas").with_sentiment("negative"),
//!     Record::new("Harga BBM naik", "Antrean di SPBU").with_sentiment("negative"),
//!     Record::new("Panen raya", "Harga gabah stabil").with_sentiment("positive"),
//! ];
//! let matched = RecordFilter::new().with_query(parse("harga")).apply(&records);
//! let topics = aggregate(matched);
//! assert_eq!(topics[0].title, "Harga BBM naik");
//! assert_eq!(topics[0].article_count, 2);
//! ```

#![warn(missing_docs)]

mod aggregate;
mod error;
mod facets;
mod ingest;
mod record;

pub use aggregate::{TopicSummary, aggregate};
pub use error::DigestError;
pub use facets::{RecordFilter, SentimentTotals, label_options, sentiment_options, sentiment_totals};
pub use ingest::{REQUIRED_FIELDS, RawCell, RawRecord, ingest, ingest_lenient};
pub use record::{Record, Sentiment, TIER_PRIORITY, Tier, split_labels};
