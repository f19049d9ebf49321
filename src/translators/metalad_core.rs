//! metalad_core translator (JSON-LD graph of a DataLad dataset)

use serde_json::Value;

use super::normalize::as_text;
use super::{SourceTranslator, TranslatorDescriptor, LEGACY_SCHEMA_RANGE};
use crate::error::TranslateResult;
use crate::jsonld::{as_slice, strip_namespace_prefix, Graph};
use crate::models::{CatalogFields, ExtractedRecord, Person, Subdataset, Url};

pub static DESCRIPTOR: TranslatorDescriptor = TranslatorDescriptor {
    name: "metalad_core",
    extractor_name: "metalad_core",
    extractor_id: None,
    schema_range: LEGACY_SCHEMA_RANGE,
    max_extractor_version: None,
};

/// Namespace of DataLad dataset ids and versions in graph documents
pub const DATALAD_PREFIX: &str = "datalad:";

/// Subdatasets listed in a Dataset node's `hasPart`
pub(crate) fn subdatasets(dataset: &Value) -> Vec<Subdataset> {
    as_slice(dataset.get("hasPart").unwrap_or(&Value::Null))
        .iter()
        .filter_map(|part| {
            let Some(version) = part.get("@id").and_then(Value::as_str) else {
                tracing::warn!("Skipping hasPart entry without @id");
                return None;
            };
            let id = part.get("identifier").and_then(Value::as_str).unwrap_or("");
            Some(Subdataset {
                dataset_id: strip_namespace_prefix(id, DATALAD_PREFIX).to_string(),
                dataset_version: strip_namespace_prefix(version, DATALAD_PREFIX).to_string(),
                dataset_path: part.get("name").and_then(as_text),
                dirs_from_path: Vec::new(),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetaladCoreTranslator;

impl SourceTranslator for MetaladCoreTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        &DESCRIPTOR
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        let graph = Graph::from_metadata(&record.extracted_metadata)?;
        let dataset = graph.select_by_type("Dataset");

        let urls: Vec<String> = dataset
            .and_then(|d| d.get("distribution"))
            .map(as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|distribution| distribution.get("url").and_then(as_text))
            .collect();

        let authors = graph
            .select_all_by_type("agent")
            .map(Person::from_node)
            .filter(|person| !person.is_empty())
            .collect();

        Ok(CatalogFields {
            // a DataLad dataset has no name, but the catalog requires one
            name: Some(String::new()),
            url: if urls.is_empty() { None } else { Some(Url::Many(urls)) },
            authors,
            subdatasets: dataset.map(subdatasets).unwrap_or_default(),
            ..CatalogFields::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(graph: Value) -> ExtractedRecord {
        ExtractedRecord::from_value(&json!({
            "type": "dataset",
            "dataset_id": "5df8eb3a-95c5-11ea-b4b9-a0369f287950",
            "dataset_version": "0321dbde969d2f5d6b533e35b5c5c51ac0b15758",
            "extractor_name": "metalad_core",
            "extractor_version": "1",
            "extracted_metadata": {"@graph": graph}
        }))
        .unwrap()
    }

    #[test]
    fn test_extract_graph_fields() {
        let record = record(json!([
            {"@id": "#agent", "@type": "agent", "name": "Jane Doe", "email": "jane@example.com"},
            {"@id": "datalad:0321dbde", "@type": "Dataset",
             "distribution": [{"url": "https://github.com/example/ds"}, {"name": "no url"}],
             "hasPart": [{"@id": "datalad:aaa111", "@type": "Dataset",
                          "identifier": "datalad:1111-2222", "name": "sub1"}]}
        ]));
        let fields = MetaladCoreTranslator.extract(&record).unwrap();

        assert_eq!(fields.name.as_deref(), Some(""));
        assert_eq!(fields.url, Some(Url::Many(vec!["https://github.com/example/ds".to_string()])));
        assert_eq!(fields.authors.len(), 1);
        assert_eq!(fields.authors[0].email.as_deref(), Some("jane@example.com"));
        assert_eq!(
            fields.subdatasets,
            vec![Subdataset {
                dataset_id: "1111-2222".to_string(),
                dataset_version: "aaa111".to_string(),
                dataset_path: Some("sub1".to_string()),
                dirs_from_path: vec![],
            }]
        );
    }

    #[test]
    fn test_empty_graph_leaves_fields_absent() {
        let fields = MetaladCoreTranslator.extract(&record(json!([]))).unwrap();
        assert_eq!(fields.url, None);
        assert!(fields.authors.is_empty());
        assert!(fields.subdatasets.is_empty());
    }

    #[test]
    fn test_subdataset_without_identifier() {
        let dataset = json!({"hasPart": {"@id": "datalad:abc", "name": "only"}});
        let parts = subdatasets(&dataset);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].dataset_id, "");
        assert_eq!(parts[0].dataset_version, "abc");
    }
}
