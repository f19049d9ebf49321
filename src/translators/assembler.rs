//! Record assembler
//!
//! Combines the identity triple of the input record with the fields a
//! translator extracted and one provenance block.

use indexmap::IndexMap;
use serde_json::Value;

use super::normalize::drop_empty;
use crate::error::TranslateResult;
use crate::models::provenance::{ExtractorUsed, MetadataSource, MetadataSources};
use crate::models::{CatalogFields, CatalogRecord, ExtractedRecord, Provenance, ProvenanceStyle};

/// Provenance block for a record in the given style
pub fn provenance(record: &ExtractedRecord, fields: &CatalogFields, style: ProvenanceStyle) -> Provenance {
    match style {
        ProvenanceStyle::ExtractorsUsed => Provenance::ExtractorsUsed(vec![ExtractorUsed::from(record)]),
        ProvenanceStyle::MetadataSources => {
            let key_source_map: IndexMap<String, Vec<String>> = fields
                .present_keys()
                .into_iter()
                .map(|key| (key.to_string(), vec![record.extractor_name.clone()]))
                .collect();
            Provenance::MetadataSources(MetadataSources {
                key_source_map,
                sources: vec![MetadataSource::from(record)],
            })
        }
    }
}

pub fn assemble(record: &ExtractedRecord, fields: CatalogFields, style: ProvenanceStyle) -> CatalogRecord {
    let provenance = provenance(record, &fields, style);
    CatalogRecord {
        record_type: record.record_type.clone(),
        dataset_id: record.dataset_id.clone(),
        dataset_version: record.dataset_version.clone(),
        fields,
        provenance,
    }
}

/// Serialize a catalog record, leaving out empty top-level values
pub fn to_catalog_value(record: &CatalogRecord) -> TranslateResult<Value> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(Value::Object(drop_empty(map))),
        other => Ok(other),
    }
}
