//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, OutputConfig, SourceConfig};
pub use loader::ConfigLoader;
