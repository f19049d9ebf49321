//! Extracted metadata record (translation input)

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{TranslateError, TranslateResult};

/// One record produced by an extractor.
///
/// `extracted_metadata` is format specific: a flat mapping, a mapping with
/// a `refs` list, or a JSON-LD document with an `@graph` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub dataset_id: String,
    pub dataset_version: String,
    pub extractor_name: String,
    pub extractor_version: String,
    /// Stable extractor identifier, immune to renames
    #[serde(default)]
    pub extractor_id: Option<String>,
    #[serde(default)]
    pub extraction_parameter: Option<Value>,
    #[serde(default)]
    pub extraction_time: Option<Value>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub agent_email: Option<String>,
    pub extracted_metadata: Value,
}

impl ExtractedRecord {
    /// Parse a raw JSON mapping, failing with `MalformedRecord` on any
    /// missing or mistyped required key
    pub fn from_value(value: &Value) -> TranslateResult<Self> {
        if !value.is_object() {
            return Err(TranslateError::MalformedRecord(
                "record is not a JSON object".to_string(),
            ));
        }

        let record: ExtractedRecord = serde_json::from_value(value.clone())
            .map_err(|e| TranslateError::MalformedRecord(e.to_string()))?;

        if record.extracted_metadata.is_null() {
            return Err(TranslateError::MalformedRecord(
                "extracted_metadata is null".to_string(),
            ));
        }

        Ok(record)
    }

    /// The stable source identifier, when supplied and well formed
    pub fn source_id(&self) -> Option<Uuid> {
        let raw = self.extractor_id.as_deref()?;
        match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::debug!("Ignoring malformed extractor_id '{}'", raw);
                None
            }
        }
    }
}
