//! The data-transformation pipeline
//!
//! A load runs the stages in a fixed order, aborting on the first
//! violation:
//!
//! 1. [`ContentValidator`] — header set, then full-content scan
//! 2. [`sanitize`] — per-row normalization into [`BlipRow`]s
//! 3. [`assemble`] — Radar/Quadrant/Ring/Blip graph construction
//!
//! [`BlipRow`]: radar_domain::BlipRow

pub mod assembler;
pub mod content_validator;
pub mod row_sanitizer;

pub use assembler::assemble;
pub use content_validator::ContentValidator;
pub use row_sanitizer::sanitize;
