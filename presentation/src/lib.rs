//! Presentation layer for techradar
//!
//! CLI argument definitions and the console implementations of the
//! application's renderer and presenter ports.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use output::{ConsoleErrorPresenter, ConsoleRenderer, RadarFormatter, TextFormatter};
pub use progress::SpinnerLoadingPresenter;
