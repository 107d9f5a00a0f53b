//! Coercion of loosely typed rows into [`Record`]s.
//!
//! Upstream tables arrive with whatever cell types the decoder produced: strings, numbers,
//! booleans or nulls. Ingestion stringifies every cell, strips stray single quotes left by
//! spreadsheet exports, and checks that the required columns exist. Nothing downstream of
//! this module sees untyped data.

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::DigestError,
    record::{Record, Sentiment, Tier, split_labels},
};

/// Columns every row must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "body", "url", "sentiment"];

/// A single loosely typed cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    /// Boolean cell.
    Bool(bool),
    /// Integer cell.
    Integer(i64),
    /// Floating-point cell.
    Float(f64),
    /// Text cell.
    Text(String),
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One decoded row, keyed by column name. A `None` cell is an explicit null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    /// Cells by column name.
    cells: BTreeMap<String, Option<RawCell>>,
}

impl RawRecord {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, replacing any previous value.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, cell: impl Into<RawCell>) -> Self {
        self.cells.insert(column.into(), Some(cell.into()));
        self
    }

    /// Sets a cell to null.
    #[must_use]
    pub fn with_null(mut self, column: impl Into<String>) -> Self {
        self.cells.insert(column.into(), None);
        self
    }

    /// Returns the cleaned text of a column, or `None` if the column is absent.
    ///
    /// Nulls become the empty string.
    fn text(&self, column: &str) -> Option<String> {
        self.cells
            .get(column)
            .map(|cell| cell.as_ref().map(clean_cell).unwrap_or_default())
    }

    /// Returns the cleaned text of a required column.
    fn required(&self, column: &str, row: usize) -> Result<String, DigestError> {
        self.text(column)
            .ok_or_else(|| DigestError::missing_field(column, row))
    }

    /// Converts the row into a record. `row` is only used in error messages.
    pub fn into_record(self, row: usize) -> Result<Record, DigestError> {
        let title = self.required("title", row)?;
        let body = self.required("body", row)?;
        let url = self.required("url", row)?;
        let sentiment = Sentiment::parse(&self.required("sentiment", row)?);
        let labels = self
            .text("label")
            .map(|cell| split_labels(&cell))
            .unwrap_or_default();
        let tier = self
            .text("tier")
            .map(|cell| Tier::parse(&cell))
            .unwrap_or_default();

        Ok(Record {
            title,
            body,
            url,
            sentiment,
            labels,
            tier,
        })
    }
}

/// Stringifies a cell and strips surrounding single quotes.
fn clean_cell(cell: &RawCell) -> String {
    match cell {
        RawCell::Text(text) => text.trim_matches('\'').to_string(),
        other => other.to_string(),
    }
}

/// Ingests every row, failing on the first one that breaks the contract.
pub fn ingest<I>(rows: I) -> Result<Vec<Record>, DigestError>
where
    I: IntoIterator<Item = RawRecord>,
{
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(row, raw)| raw.into_record(row))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(records = records.len(), "ingested rows");
    Ok(records)
}

/// Ingests every valid row and returns the errors of the rows that were skipped.
pub fn ingest_lenient<I>(rows: I) -> (Vec<Record>, Vec<DigestError>)
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for (row, raw) in rows.into_iter().enumerate() {
        match raw.into_record(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(row, error = %err, "skipping row");
                skipped.push(err);
            }
        }
    }
    debug!(
        records = records.len(),
        skipped = skipped.len(),
        "ingested rows leniently"
    );
    (records, skipped)
}
