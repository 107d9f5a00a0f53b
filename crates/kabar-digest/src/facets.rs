//! Header totals, dropdown options and record filtering.

use std::collections::BTreeSet;

use kabar_query::QueryNode;
use serde::Serialize;

use crate::record::{Record, Sentiment};

/// Record counts by sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTotals {
    /// All records.
    pub total: usize,
    /// Positive records.
    pub positive: usize,
    /// Negative records.
    pub negative: usize,
    /// Neutral records.
    pub neutral: usize,
}

/// Counts records by sentiment. Other sentiments only count towards the total.
pub fn sentiment_totals<'a, I>(records: I) -> SentimentTotals
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut totals = SentimentTotals::default();
    for record in records {
        totals.total += 1;
        match record.sentiment {
            Sentiment::Positive => totals.positive += 1,
            Sentiment::Negative => totals.negative += 1,
            Sentiment::Neutral => totals.neutral += 1,
            Sentiment::Other(_) => {}
        }
    }
    totals
}

/// Returns every distinct label, sorted.
pub fn label_options<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .flat_map(|record| record.labels.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns every distinct non-empty sentiment, normalized and sorted.
pub fn sentiment_options<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|record| record.sentiment.as_str())
        .filter(|sentiment| !sentiment.is_empty())
        .map(String::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Criteria a record must meet to stay in view. Unset criteria accept everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Required sentiment.
    pub sentiment: Option<Sentiment>,
    /// Required label.
    pub label: Option<String>,
    /// Search query; the empty query accepts everything.
    pub query: QueryNode,
}

impl RecordFilter {
    /// Creates a filter that accepts every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a sentiment.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: impl Into<Sentiment>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    /// Requires a label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into().trim().to_string());
        self
    }

    /// Requires a query match.
    #[must_use]
    pub fn with_query(mut self, query: QueryNode) -> Self {
        self.query = query;
        self
    }

    /// Returns true if the record meets every set criterion.
    pub fn matches(&self, record: &Record) -> bool {
        if self
            .sentiment
            .as_ref()
            .is_some_and(|sentiment| *sentiment != record.sentiment)
        {
            return false;
        }
        if self
            .label
            .as_deref()
            .is_some_and(|label| !record.has_label(label))
        {
            return false;
        }
        self.query.matches_item(record)
    }

    /// Returns the records that pass the filter, in input order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|record| self.matches(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use kabar_query::parse;

    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("Harga beras naik", "Petani untung")
                .with_sentiment("positive")
                .with_labels("ekonomi, pangan"),
            Record::new("Banjir Jakarta", "Ribuan mengungsi")
                .with_sentiment("negative")
                .with_labels("bencana"),
            Record::new("Cuaca cerah", "Tidak ada hujan")
                .with_sentiment("neutral")
                .with_labels(""),
            Record::new("Harga cabai", "Pedagang mengeluh")
                .with_sentiment("NEGATIVE")
                .with_labels("ekonomi"),
            Record::new("Tanpa label", "").with_sentiment("mixed"),
        ]
    }

    #[test]
    fn totals_by_sentiment() {
        assert_eq!(
            sentiment_totals(&records()),
            SentimentTotals {
                total: 5,
                positive: 1,
                negative: 2,
                neutral: 1,
            }
        );
        assert_eq!(sentiment_totals(&Vec::<Record>::new()), SentimentTotals::default());
    }

    #[test]
    fn options_are_sorted_and_unique() {
        assert_eq!(
            label_options(&records()),
            vec!["bencana", "ekonomi", "pangan"]
        );
        assert_eq!(
            sentiment_options(&records()),
            vec!["mixed", "negative", "neutral", "positive"]
        );
    }

    #[test]
    fn filter_by_sentiment() {
        let data = records();
        let filter = RecordFilter::new().with_sentiment("Negative");
        let titles: Vec<_> = filter.apply(&data).iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Banjir Jakarta", "Harga cabai"]);
    }

    #[test]
    fn filter_by_label() {
        let data = records();
        let filter = RecordFilter::new().with_label(" ekonomi ");
        assert_eq!(filter.apply(&data).len(), 2);
    }

    #[test]
    fn criteria_combine() {
        let data = records();
        let filter = RecordFilter::new()
            .with_label("ekonomi")
            .with_query(parse("harga -cabai"));
        let titles: Vec<_> = filter.apply(&data).iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Harga beras naik"]);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let data = records();
        assert_eq!(RecordFilter::new().apply(&data).len(), data.len());
    }
}
