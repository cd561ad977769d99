//! Google Sheets input
//!
//! A published Google Sheet is just one producer of a CSV URL: given
//! the publish token it exposes, the sheet's CSV export lives at a
//! fixed address. A full URL passes through untouched so users can
//! paste the published link directly.

/// Build the published-CSV export URL for a Google Sheet.
pub fn published_csv_url(sheet: &str) -> String {
    if sheet.starts_with("http://") || sheet.starts_with("https://") {
        sheet.to_string()
    } else {
        format!("https://docs.google.com/spreadsheets/d/e/{sheet}/pub?output=csv")
    }
}
