//! Ingestion, filtering and aggregation over decoded rows.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use kabar_digest::{
    RawRecord, Record, RecordFilter, Sentiment, Tier, aggregate, ingest, label_options,
    sentiment_totals,
};
use kabar_query::parse;

fn rows(json: &str) -> Vec<RawRecord> {
    serde_json::from_str(json).unwrap()
}

fn fixture() -> Vec<Record> {
    ingest(rows(
        r#"[
            {"title": "T", "body": "'subsidi rumah diperluas'", "url": "u2", "sentiment": "positive", "label": "ekonomi", "tier": "Tier 2"},
            {"title": "T", "body": "", "url": "u1", "sentiment": "'Positive'", "label": "ekonomi, properti", "tier": "Tier 1"},
            {"title": "T", "body": "kuota ditambah", "url": "u3", "sentiment": "negative", "label": null, "tier": "-"},
            {"title": "Banjir", "body": "rumah terendam", "url": "b1", "sentiment": "negative", "label": "bencana"}
        ]"#,
    ))
    .unwrap()
}

#[test]
fn majority_sentiment_and_count() {
    let records = fixture();
    let topics = aggregate(&records);

    assert_eq!(topics[0].title, "T");
    assert_eq!(topics[0].article_count, 3);
    assert_eq!(topics[0].dominant_sentiment, Sentiment::Positive);
    assert_eq!(topics[0].representative_body.as_deref(), Some("subsidi rumah diperluas"));
}

#[test]
fn tier_one_link_is_representative() {
    let records = fixture();
    let topic = &aggregate(&records)[0];
    assert_eq!(topic.representative_link.as_deref(), Some("u1"));
    assert_eq!(topic.representative_tier, Some(Tier::Tier1));
}

#[test]
fn query_then_aggregate() {
    let records = fixture();
    let matched = RecordFilter::new().with_query(parse("rumah")).apply(&records);
    let titles: Vec<_> = aggregate(matched).into_iter().map(|t| (t.title, t.article_count)).collect();
    assert_eq!(titles, vec![("T".to_string(), 1), ("Banjir".to_string(), 1)]);
}

#[test]
fn empty_query_keeps_every_record() {
    let records = fixture();
    let matched = RecordFilter::new().with_query(parse("   ")).apply(&records);
    assert_eq!(matched.len(), records.len());
}

#[test]
fn facets_over_ingested_rows() {
    let records = fixture();
    let totals = sentiment_totals(&records);
    assert_eq!((totals.total, totals.positive, totals.negative, totals.neutral), (4, 2, 2, 0));
    assert_eq!(label_options(&records), vec!["bencana", "ekonomi", "properti"]);
}

#[test]
fn aggregation_is_idempotent() {
    let records = fixture();
    assert_eq!(aggregate(&records), aggregate(&records));
}

#[test]
fn missing_sentiment_column_is_rejected() {
    let err = ingest(rows(r#"[{"title": "T", "body": "b", "url": "u"}]"#)).unwrap_err();
    assert_eq!(err.to_string(), "invalid input: sentiment is missing from row 0");
}
