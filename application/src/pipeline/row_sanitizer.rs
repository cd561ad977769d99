//! Row sanitization
//!
//! Reduces one raw CSV row to the canonical [`BlipRow`] shape. Pure
//! and total over any header-valid row, except for the emptiness rule
//! on required fields.

use crate::ports::csv_source::RawRow;
use radar_domain::{BlipRow, RadarError};

/// Sanitize one raw row into a [`BlipRow`].
///
/// `row_number` is 1-based and used only for error detail.
///
/// Rules:
/// - all values are trimmed; missing optional fields default to ""
/// - `isNew` is true iff the raw value equals "true" case-insensitively
/// - ring and quadrant keep their dataset casing for display
/// - a blank `name`, `ring` or `quadrant` after trimming is an error
pub fn sanitize(row: &RawRow, row_number: usize) -> Result<BlipRow, RadarError> {
    let name = required(row, "name", row_number)?;
    let ring = required(row, "ring", row_number)?;
    let quadrant = required(row, "quadrant", row_number)?;

    let is_new = optional(row, "isNew").eq_ignore_ascii_case("true");

    Ok(BlipRow::new(name, ring, quadrant, is_new)
        .with_topic(optional(row, "topic"))
        .with_description(optional(row, "description")))
}

fn required(row: &RawRow, column: &str, row_number: usize) -> Result<String, RadarError> {
    let value = optional(row, column);
    if value.is_empty() {
        return Err(RadarError::empty_field(column, row_number));
    }
    Ok(value)
}

fn optional(row: &RawRow, column: &str) -> String {
    row.get(column).unwrap_or("").trim().to_string()
}
