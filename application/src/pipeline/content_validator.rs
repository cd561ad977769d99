//! Content validation for a parsed CSV table
//!
//! Runs before any row is sanitized. Validation is all-or-nothing:
//! the first violation aborts the whole load and no partial radar is
//! ever produced.

use crate::ports::csv_source::RawRow;
use radar_domain::RadarError;
use radar_domain::radar::ring::MAX_RINGS;

/// Columns every dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["name", "ring", "quadrant", "isNew"];

/// Columns a dataset may carry; missing values default to "".
pub const OPTIONAL_COLUMNS: [&str; 2] = ["topic", "description"];

/// Validates the header set and the semantic content of a parsed table
pub struct ContentValidator {
    columns: Vec<String>,
}

impl ContentValidator {
    /// Create a validator for the ordered column names found in the
    /// header row.
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Verify that every required column is present.
    ///
    /// Fails with [`MalformedDataKind::MissingHeaders`] listing the
    /// missing names; any unrecognized columns are named in the detail
    /// but do not fail the check on their own.
    ///
    /// [`MalformedDataKind::MissingHeaders`]: radar_domain::MalformedDataKind::MissingHeaders
    pub fn verify_headers(&self) -> Result<(), RadarError> {
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|required| !self.columns.iter().any(|c| c == required))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        let unexpected: Vec<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|c| !REQUIRED_COLUMNS.contains(c) && !OPTIONAL_COLUMNS.contains(c))
            .collect();

        Err(RadarError::missing_headers(&missing, &unexpected))
    }

    /// Scan all rows before any is trusted.
    ///
    /// Fails if a required field is blank, or if the dataset carries
    /// more than four distinct ring names. Distinctness is on the raw
    /// (trimmed) string, so two casings of the same ring both count
    /// toward the cap.
    pub fn verify_content(&self, rows: &[RawRow]) -> Result<(), RadarError> {
        for (index, row) in rows.iter().enumerate() {
            for column in REQUIRED_COLUMNS {
                let value = row.get(column).unwrap_or("");
                if value.trim().is_empty() {
                    return Err(RadarError::empty_field(column, index + 1));
                }
            }
        }

        let mut ring_names: Vec<&str> = Vec::new();
        for row in rows {
            let ring = row.get("ring").unwrap_or("").trim();
            if !ring_names.contains(&ring) {
                ring_names.push(ring);
            }
        }
        if ring_names.len() > MAX_RINGS {
            return Err(RadarError::too_many_rings(ring_names.len()));
        }

        Ok(())
    }
}
