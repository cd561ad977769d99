//! Domain error types

use thiserror::Error;

/// The specific way a dataset failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedDataKind {
    /// A required column is absent from the header row.
    MissingHeaders,
    /// More than four distinct ring names appear in the dataset.
    TooManyRings,
    /// A required field is blank after trimming.
    EmptyField,
}

/// Domain-level errors raised while validating and assembling a radar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RadarError {
    #[error("{detail}")]
    MalformedData {
        kind: MalformedDataKind,
        detail: String,
    },

    #[error("Unknown ring name: {0}")]
    UnknownRing(String),
}

impl RadarError {
    pub fn missing_headers(missing: &[&str], unexpected: &[&str]) -> Self {
        let mut detail = format!(
            "Document is missing one or more required headers: {}.",
            missing.join(", ")
        );
        if !unexpected.is_empty() {
            detail.push_str(&format!(
                " Unexpected headers found: {}.",
                unexpected.join(", ")
            ));
        }
        RadarError::MalformedData {
            kind: MalformedDataKind::MissingHeaders,
            detail,
        }
    }

    pub fn too_many_rings(count: usize) -> Self {
        RadarError::MalformedData {
            kind: MalformedDataKind::TooManyRings,
            detail: format!("Document contains {count} distinct ring names; at most 4 are allowed."),
        }
    }

    pub fn empty_field(field: &str, row: usize) -> Self {
        RadarError::MalformedData {
            kind: MalformedDataKind::EmptyField,
            detail: format!("Document has a blank \"{field}\" value in row {row}."),
        }
    }

    /// Kind of malformed data, if this is a malformed-data error.
    pub fn malformed_kind(&self) -> Option<MalformedDataKind> {
        match self {
            RadarError::MalformedData { kind, .. } => Some(*kind),
            RadarError::UnknownRing(_) => None,
        }
    }
}
