//! CSV document source
//!
//! Implements the application's `CsvSource` port for HTTP(S) URLs and
//! local files. Fetch failures (404s, connect errors, missing files)
//! map to `SourceError::NotFound` so the loader can show the
//! sheet-not-found message.

use super::filename::display_name;
use super::parser::parse_table;
use async_trait::async_trait;
use radar_application::{CsvSource, CsvTable, SourceError};
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Where a CSV document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl SourceLocation {
    /// Classify a raw input string as a URL or a file path.
    pub fn from_input(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                SourceLocation::Url(input.to_string())
            }
            _ => SourceLocation::File(PathBuf::from(input)),
        }
    }

    /// The name shown in the document title for this location.
    pub fn display_name(&self) -> String {
        match self {
            SourceLocation::Url(url) => display_name(url),
            SourceLocation::File(path) => display_name(&path.to_string_lossy()),
        }
    }
}

/// CSV fetch/parse adapter for one document location
pub struct CsvDocumentSource {
    location: SourceLocation,
    client: reqwest::Client,
}

impl CsvDocumentSource {
    pub fn new(location: SourceLocation) -> Self {
        Self {
            location,
            client: reqwest::Client::new(),
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    async fn fetch_text(&self) -> Result<String, SourceError> {
        match &self.location {
            SourceLocation::Url(url) => {
                debug!("Fetching CSV from {url}");
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .map_err(|e| SourceError::NotFound(format!("{url}: {e}")))?;
                if !response.status().is_success() {
                    return Err(SourceError::NotFound(format!(
                        "{url}: HTTP {}",
                        response.status()
                    )));
                }
                response
                    .text()
                    .await
                    .map_err(|e| SourceError::NotFound(format!("{url}: {e}")))
            }
            SourceLocation::File(path) => {
                debug!("Reading CSV from {}", path.display());
                tokio::fs::read_to_string(path).await.map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        SourceError::NotFound(path.display().to_string())
                    } else {
                        SourceError::Io(e)
                    }
                })
            }
        }
    }
}

#[async_trait]
impl CsvSource for CsvDocumentSource {
    async fn fetch(&self) -> Result<CsvTable, SourceError> {
        let content = self.fetch_text().await?;
        parse_table(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_location_classification() {
        assert_eq!(
            SourceLocation::from_input("https://example.com/r.csv"),
            SourceLocation::Url("https://example.com/r.csv".to_string())
        );
        assert_eq!(
            SourceLocation::from_input("data/r.csv"),
            SourceLocation::File(PathBuf::from("data/r.csv"))
        );
        // Windows drive letters are not URL schemes.
        assert_eq!(
            SourceLocation::from_input("C:\\data\\r.csv"),
            SourceLocation::File(PathBuf::from("C:\\data\\r.csv"))
        );
    }

    #[test]
    fn test_display_name_for_locations() {
        let url = SourceLocation::from_input("https://example.com/radars/vol+1.csv");
        assert_eq!(url.display_name(), "vol 1.csv");
        let file = SourceLocation::from_input("/tmp/radar.csv");
        assert_eq!(file.display_name(), "radar.csv");
    }

    #[tokio::test]
    async fn test_fetches_and_parses_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,ring,quadrant,isNew").unwrap();
        writeln!(file, "Kafka,adopt,Platforms,true").unwrap();

        let source = CsvDocumentSource::new(SourceLocation::File(file.path().to_path_buf()));
        let table = source.fetch().await.unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].get("name"), Some("Kafka"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let source =
            CsvDocumentSource::new(SourceLocation::File(PathBuf::from("/nonexistent/r.csv")));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)));
    }
}
