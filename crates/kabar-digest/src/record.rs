//! Strongly typed news records.

use std::fmt;

use kabar_query::Searchable;
use serde::{Deserialize, Serialize};

/// Fixed tier priority, best first.
///
/// A record whose tier is not in this table has no priority at all.
pub const TIER_PRIORITY: [&str; 5] = ["Tier 1", "Tier 2", "Tier 3", "-", ""];

/// Source-credibility tier of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tier {
    /// `Tier 1`, the most credible sources.
    Tier1,
    /// `Tier 2`.
    Tier2,
    /// `Tier 3`.
    Tier3,
    /// `-`, explicitly untiered.
    Dash,
    /// No tier given.
    #[default]
    Empty,
    /// Any other value. Never preferred by tier ranking.
    Unranked(String),
}

impl Tier {
    /// Parses a tier cell. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Tier 1" => Self::Tier1,
            "Tier 2" => Self::Tier2,
            "Tier 3" => Self::Tier3,
            "-" => Self::Dash,
            "" => Self::Empty,
            other => Self::Unranked(other.to_string()),
        }
    }

    /// Returns the tier text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tier1 => TIER_PRIORITY[0],
            Self::Tier2 => TIER_PRIORITY[1],
            Self::Tier3 => TIER_PRIORITY[2],
            Self::Dash => TIER_PRIORITY[3],
            Self::Empty => TIER_PRIORITY[4],
            Self::Unranked(text) => text,
        }
    }

    /// Returns the position in [`TIER_PRIORITY`], where 0 is best.
    pub fn priority(&self) -> Option<usize> {
        TIER_PRIORITY.iter().position(|tier| *tier == self.as_str())
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Tier {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Tier {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Tier> for String {
    fn from(tier: Tier) -> Self {
        tier.as_str().to_string()
    }
}

/// Article sentiment, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    /// `positive`.
    Positive,
    /// `negative`.
    Negative,
    /// `neutral`.
    Neutral,
    /// Any other label, normalized to lower case.
    Other(String),
}

impl Sentiment {
    /// Parses a sentiment cell: trims whitespace and stray single quotes, then lower-cases.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().trim_matches('\'').trim().to_lowercase();
        match normalized.as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Other(normalized),
        }
    }

    /// Returns the normalized lower-case label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Other(text) => text,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Sentiment {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Sentiment {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Sentiment> for String {
    fn from(sentiment: Sentiment) -> Self {
        sentiment.as_str().to_string()
    }
}

/// Splits a comma-separated label cell into trimmed, non-empty labels.
pub fn split_labels(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

/// One ingested article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Headline; records with the same title form one topic.
    pub title: String,
    /// Article text.
    pub body: String,
    /// Link to the article.
    pub url: String,
    /// Sentiment label.
    pub sentiment: Sentiment,
    /// Labels, in cell order.
    pub labels: Vec<String>,
    /// Source tier.
    pub tier: Tier,
}

impl Record {
    /// Creates a record with a title and body and every other field empty.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Sets the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the sentiment.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: impl Into<Sentiment>) -> Self {
        self.sentiment = sentiment.into();
        self
    }

    /// Sets the labels from a comma-separated cell.
    #[must_use]
    pub fn with_labels(mut self, labels: &str) -> Self {
        self.labels = split_labels(labels);
        self
    }

    /// Sets the tier.
    #[must_use]
    pub fn with_tier(mut self, tier: impl Into<Tier>) -> Self {
        self.tier = tier.into();
        self
    }

    /// Returns true if the record carries the given label.
    pub fn has_label(&self, label: &str) -> bool {
        let label = label.trim();
        self.labels.iter().any(|l| l == label)
    }
}

impl Searchable for Record {
    fn haystacks(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.body.as_str()]
    }
}
