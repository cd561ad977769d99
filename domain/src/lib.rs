//! Domain layer for techradar
//!
//! This crate contains the radar entities and their invariants.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Radar
//!
//! The root aggregate built from one CSV dataset. A radar owns its
//! quadrants, quadrants own their blips, and blips share immutable
//! ring values resolved once per load.
//!
//! ## Ring
//!
//! A concentric maturity band. Ring identity is semantically fixed:
//! adopt=0, trial=1, assess=2, hold=3, regardless of the order in
//! which ring names appear in the dataset.

pub mod error;
pub mod radar;
pub mod util;

// Re-export commonly used types
pub use error::{MalformedDataKind, RadarError};
pub use radar::{Blip, BlipRow, Quadrant, Radar, Ring};
pub use util::capitalize;
