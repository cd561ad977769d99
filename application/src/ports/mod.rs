//! Ports (trait seams) implemented outside the application layer
//!
//! The CSV source is implemented by infrastructure adapters; the
//! renderer and presenters are implemented by the presentation layer.

pub mod csv_source;
pub mod error_presenter;
pub mod loading_presenter;
pub mod renderer;
