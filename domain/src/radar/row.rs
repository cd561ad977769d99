//! Sanitized blip row
//!
//! The canonical shape a raw CSV row is reduced to before assembly.

use serde::{Deserialize, Serialize};

/// One sanitized dataset row
///
/// Produced by the application layer's row sanitizer; immutable once
/// produced. Required fields (`name`, `ring`, `quadrant`) are trimmed
/// and non-empty; optional fields default to the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlipRow {
    pub name: String,
    /// Ring name verbatim (trimmed, casing preserved); matched
    /// case-insensitively downstream.
    pub ring: String,
    /// Quadrant name verbatim (trimmed, casing preserved).
    pub quadrant: String,
    pub is_new: bool,
    pub topic: String,
    pub description: String,
}

impl BlipRow {
    pub fn new(
        name: impl Into<String>,
        ring: impl Into<String>,
        quadrant: impl Into<String>,
        is_new: bool,
    ) -> Self {
        Self {
            name: name.into(),
            ring: ring.into(),
            quadrant: quadrant.into(),
            is_new,
            topic: String::new(),
            description: String::new(),
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
