//! Infrastructure layer for techradar
//!
//! This crate contains adapters that implement the ports defined in
//! the application layer, plus configuration file loading.

pub mod config;
pub mod csv;
pub mod sheets;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, OutputConfig, SourceConfig};
pub use csv::{CsvDocumentSource, SourceLocation, display_name, parse_table};
pub use sheets::published_csv_url;
