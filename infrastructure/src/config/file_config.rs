//! Configuration file schema

use serde::{Deserialize, Serialize};

/// Source-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// CSV URL or local path to load by default.
    pub csv: Option<String>,
    /// Published Google Sheet token (alternative to `csv`).
    pub sheet: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            csv: None,
            sheet: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Enable colored output
    pub color: bool,
    /// Requested viewport size; the loader floors this to 620.
    pub viewport_size: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            viewport_size: 620,
        }
    }
}

/// Root configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}
