//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the rendered radar
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Radar as a quadrant/ring text layout
    Text,
    /// Radar as JSON
    Json,
}

/// CLI arguments for techradar
#[derive(Parser, Debug)]
#[command(name = "techradar")]
#[command(version, about = "Render a technology radar from a CSV dataset")]
#[command(long_about = r#"
Techradar loads a CSV dataset describing technology items ("blips") and
renders it as a quadrant/ring radar.

The dataset needs a header row with at least the columns
name, ring, quadrant, isNew (topic and description are optional).
Ring must be one of adopt, trial, assess, hold (any casing).

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./techradar.toml    Project-level config
3. ~/.config/techradar/config.toml   Global config

Example:
  techradar data/radar.csv
  techradar https://example.com/radar.csv --output json
  techradar --sheet 2PACX-1vTqU8RF...
"#)]
pub struct Cli {
    /// CSV source: a URL or a local file path (falls back to config)
    pub source: Option<String>,

    /// Published Google Sheet token to load instead of a CSV source
    #[arg(long, value_name = "TOKEN")]
    pub sheet: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Viewport size for the rendered radar
    #[arg(long, value_name = "PIXELS")]
    pub size: Option<u32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
