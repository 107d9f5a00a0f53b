//! Per-title topic rollup.
//!
//! Records sharing an exact title form one topic. Topics are ranked by member count, highest
//! first, with ties kept in the order their first member appeared. For each topic the
//! aggregator picks a dominant sentiment by majority vote and a representative link by tier.
//!
//! # Representative selection
//!
//! 1. Among members with a non-empty URL whose tier appears in
//!    [`TIER_PRIORITY`](crate::TIER_PRIORITY), take the best-ranked one; the first such
//!    member wins ties.
//! 2. Otherwise take the first member with a non-empty URL.
//! 3. If no member has a URL, the best-ranked member still supplies the tier and there is
//!    no link.
//!
//! The representative's URL becomes the link (absent if empty) and its tier the tier.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::record::{Record, Sentiment, Tier};

/// Summary row for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    /// Shared title of the group.
    pub title: String,
    /// Number of records with this title, always at least 1.
    pub article_count: usize,
    /// Most common sentiment; the first seen wins ties.
    pub dominant_sentiment: Sentiment,
    /// URL of the representative record.
    pub representative_link: Option<String>,
    /// Tier of the representative record.
    pub representative_tier: Option<Tier>,
    /// First non-empty body in the group.
    pub representative_body: Option<String>,
}

impl TopicSummary {
    /// Summarizes a non-empty group of records sharing one title.
    fn from_group(title: &str, members: &[&Record]) -> Self {
        let representative = representative(members);
        Self {
            title: title.to_string(),
            article_count: members.len(),
            dominant_sentiment: dominant_sentiment(members),
            representative_link: representative
                .filter(|record| !record.url.is_empty())
                .map(|record| record.url.clone()),
            representative_tier: representative.map(|record| record.tier.clone()),
            representative_body: members
                .iter()
                .find(|record| !record.body.is_empty())
                .map(|record| record.body.clone()),
        }
    }
}

/// Majority vote over normalized sentiments, ties to the first seen.
fn dominant_sentiment(members: &[&Record]) -> Sentiment {
    let mut tally: Vec<(&Sentiment, usize)> = Vec::new();
    for record in members {
        match tally.iter_mut().find(|(seen, _)| **seen == record.sentiment) {
            Some((_, count)) => *count += 1,
            None => tally.push((&record.sentiment, 1)),
        }
    }

    let mut best: Option<(&Sentiment, usize)> = None;
    for (sentiment, count) in tally {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((sentiment, count));
        }
    }
    best.map(|(sentiment, _)| sentiment.clone()).unwrap_or_default()
}

/// Returns the best-ranked member by tier, the first one on ties.
fn best_ranked<'a, I>(members: I) -> Option<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    // `min_by_key` keeps the first of equal minima.
    members
        .into_iter()
        .filter_map(|record| record.tier.priority().map(|rank| (rank, record)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, record)| record)
}

/// Picks the member whose link and tier represent the group.
fn representative<'a>(members: &[&'a Record]) -> Option<&'a Record> {
    let linked = || members.iter().copied().filter(|record| !record.url.is_empty());
    best_ranked(linked())
        .or_else(|| linked().next())
        .or_else(|| best_ranked(members.iter().copied()))
}

/// Groups records by exact title and summarizes each group.
///
/// The result is ordered by article count, descending, and is stable on the order in which
/// each title was first encountered. Empty input yields an empty result.
pub fn aggregate<'a, I>(records: I) -> Vec<TopicSummary>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: Vec<(&str, Vec<&Record>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        match index.get(record.title.as_str()) {
            Some(&slot) => groups[slot].1.push(record),
            None => {
                index.insert(record.title.as_str(), groups.len());
                groups.push((record.title.as_str(), vec![record]));
            }
        }
    }

    let mut summaries: Vec<TopicSummary> = groups
        .iter()
        .map(|(title, members)| TopicSummary::from_group(title, members))
        .collect();
    summaries.sort_by(|a, b| b.article_count.cmp(&a.article_count));

    debug!(topics = summaries.len(), "aggregated records by title");
    summaries
}
