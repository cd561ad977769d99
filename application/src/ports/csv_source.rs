//! CSV source port
//!
//! Defines the interface for fetching and parsing the CSV resource a
//! radar is built from. Implementations live in the infrastructure
//! layer (HTTP fetch, local files).

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Errors a CSV source can fail with.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The resource could not be found or fetched (404, connect
    /// failure, missing file). Surfaces to the user as the
    /// sheet-not-found message.
    #[error("Sheet not found: {0}")]
    NotFound(String),

    /// The resource was fetched but is not parseable as CSV.
    #[error("Failed to parse CSV: {0}")]
    Parse(String),

    #[error("I/O error reading CSV source: {0}")]
    Io(#[from] std::io::Error),
}

/// One raw CSV data row, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Raw value for a column, if the column exists in this row.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A parsed CSV table: the ordered header columns plus all data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl CsvTable {
    pub fn new(columns: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { columns, rows }
    }
}

/// Port for fetching and parsing the CSV resource
///
/// The single `fetch` call is the only suspension point in a load.
#[async_trait]
pub trait CsvSource: Send + Sync {
    async fn fetch(&self) -> Result<CsvTable, SourceError>;
}
