//! CSV parsing
//!
//! Turns raw CSV text into the `CsvTable` boundary type. RFC4180
//! quoting is handled by the `csv` crate.

use csv::ReaderBuilder;
use radar_application::{CsvTable, RawRow, SourceError};

/// Parse CSV content into a table of raw rows keyed by header name.
///
/// Rows shorter than the header are allowed; the missing trailing
/// fields simply have no value, which the validator treats as blank.
pub fn parse_table(content: &str) -> Result<CsvTable, SourceError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| SourceError::Parse(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| SourceError::Parse(format!("Failed to parse CSV row {}: {e}", index + 1)))?;
        let row: RawRow = columns
            .iter()
            .map(String::as_str)
            .zip(record.iter())
            .collect();
        rows.push(row);
    }

    Ok(CsvTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_header_and_rows() {
        let table = parse_table("name,ring,quadrant,isNew\nKafka,adopt,Platforms,true\n").unwrap();
        assert_eq!(table.columns, ["name", "ring", "quadrant", "isNew"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].get("name"), Some("Kafka"));
        assert_eq!(table.rows[0].get("isNew"), Some("true"));
    }

    #[test]
    fn test_honors_rfc4180_quoting() {
        let content = "name,ring,quadrant,isNew,description\n\
                       \"Spark, Structured Streaming\",adopt,Platforms,false,\"Says \"\"hi\"\"\nacross lines\"\n";
        let table = parse_table(content).unwrap();
        assert_eq!(
            table.rows[0].get("name"),
            Some("Spark, Structured Streaming")
        );
        assert_eq!(
            table.rows[0].get("description"),
            Some("Says \"hi\"\nacross lines")
        );
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_absent() {
        let table = parse_table("name,ring,quadrant,isNew\nKafka,adopt\n").unwrap();
        assert_eq!(table.rows[0].get("quadrant"), None);
    }

    #[test]
    fn test_empty_content_yields_empty_table() {
        let table = parse_table("").unwrap();
        assert!(table.columns.is_empty());
        assert!(table.rows.is_empty());
    }
}
