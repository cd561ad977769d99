//! Console output

pub mod console;
pub mod formatter;

pub use console::{ConsoleErrorPresenter, ConsoleRenderer};
pub use formatter::{RadarFormatter, TextFormatter};
