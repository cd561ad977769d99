//! Application layer for techradar
//!
//! This crate contains the load pipeline (validation, sanitization,
//! assembly) as use cases, and the ports implemented by the
//! infrastructure and presentation layers.

pub mod pipeline;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use pipeline::{ContentValidator, assemble, sanitize};
pub use ports::{
    csv_source::{CsvSource, CsvTable, RawRow, SourceError},
    error_presenter::{ErrorPresenter, NoErrorPresenter},
    loading_presenter::{LoadingPresenter, NoLoadingPresenter},
    renderer::{NoRenderer, Renderer},
};
pub use use_cases::load_radar::{
    DocumentTitle, LoadError, LoadOutcome, LoadRadarInput, LoadRadarUseCase,
};
