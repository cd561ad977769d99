//! CSV source adapters
//!
//! RFC4180 parsing plus the fetch adapters (HTTP and local files)
//! implementing the application's `CsvSource` port.

pub mod document;
pub mod filename;
pub mod parser;

pub use document::{CsvDocumentSource, SourceLocation};
pub use filename::display_name;
pub use parser::parse_table;
