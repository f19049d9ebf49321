//! Provenance blocks recording which extractor produced a catalog record

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::record::ExtractedRecord;
use super::version::Version;

/// Schema version from which `metadata_sources` replaces `extractors_used`
pub const METADATA_SOURCES_SINCE: Version = Version::new(1, 0, 0);

/// Shape of the provenance block, a property of the target schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvenanceStyle {
    ExtractorsUsed,
    MetadataSources,
}

impl ProvenanceStyle {
    pub fn for_schema(schema_version: &Version) -> Self {
        if *schema_version >= METADATA_SOURCES_SINCE {
            ProvenanceStyle::MetadataSources
        } else {
            ProvenanceStyle::ExtractorsUsed
        }
    }
}

/// Entry of the legacy `extractors_used` list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractorUsed {
    pub extractor_name: String,
    pub extractor_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_parameter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extraction_time: Option<Value>,
}

impl From<&ExtractedRecord> for ExtractorUsed {
    fn from(record: &ExtractedRecord) -> Self {
        Self {
            extractor_name: record.extractor_name.clone(),
            extractor_version: record.extractor_version.clone(),
            extraction_parameter: record.extraction_parameter.clone(),
            extraction_time: record.extraction_time.clone(),
        }
    }
}

/// One source in a `metadata_sources` block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataSource {
    pub source_name: String,
    pub source_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_parameter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_time: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
}

impl From<&ExtractedRecord> for MetadataSource {
    fn from(record: &ExtractedRecord) -> Self {
        Self {
            source_name: record.extractor_name.clone(),
            source_version: record.extractor_version.clone(),
            source_parameter: record.extraction_parameter.clone(),
            source_time: record.extraction_time.clone(),
            agent_email: record.agent_email.clone(),
            agent_name: record.agent_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataSources {
    /// Catalog key -> names of the sources that supplied it
    pub key_source_map: IndexMap<String, Vec<String>>,
    pub sources: Vec<MetadataSource>,
}

/// Provenance block, flattened into the catalog record under its key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Provenance {
    #[serde(rename = "extractors_used")]
    ExtractorsUsed(Vec<ExtractorUsed>),
    #[serde(rename = "metadata_sources")]
    MetadataSources(MetadataSources),
}
