//! Error types for catalog translation

use thiserror::Error;

/// Translation error
///
/// Every variant describes the failure of a single record; callers decide
/// whether one failure should stop a batch.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Unrecognized source: {name} {version}")]
    UnrecognizedSource { name: String, version: String },

    #[error("Ambiguous source {name}: matched by {}", .candidates.join(", "))]
    AmbiguousSource {
        name: String,
        candidates: Vec<&'static str>,
    },

    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslateError {
    /// True when no translator accepted the record's source
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, TranslateError::UnrecognizedSource { .. })
    }

    /// Short machine-readable kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            TranslateError::MalformedRecord(_) => "malformed_record",
            TranslateError::UnrecognizedSource { .. } => "unrecognized_source",
            TranslateError::AmbiguousSource { .. } => "ambiguous_source",
            TranslateError::UnresolvedReference(_) => "unresolved_reference",
            TranslateError::InvalidVersion(_) => "invalid_version",
            TranslateError::Json(_) => "json",
        }
    }
}

/// Result type alias for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
