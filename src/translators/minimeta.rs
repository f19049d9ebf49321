//! metalad_studyminimeta translator
//!
//! Authors are listed on the Dataset node as `@id` stubs and detailed in
//! the separate `#personList` node; publications in `#publicationList`
//! reference the same persons. Both are joined back into full persons.

use serde_json::Value;

use super::metalad_core::subdatasets;
use super::normalize::{as_doi_url, as_text, string_list};
use super::{SourceTranslator, TranslatorDescriptor, LEGACY_SCHEMA_RANGE};
use crate::error::{TranslateError, TranslateResult};
use crate::jsonld::{as_slice, resolve_references, Graph};
use crate::models::{CatalogFields, ExtractedRecord, Funding, Person, Publication, Url};

pub static DESCRIPTOR: TranslatorDescriptor = TranslatorDescriptor {
    name: "minimeta",
    extractor_name: "metalad_studyminimeta",
    extractor_id: None,
    schema_range: LEGACY_SCHEMA_RANGE,
    max_extractor_version: None,
};

const PERSON_LIST_ID: &str = "#personList";
const PUBLICATION_LIST_ID: &str = "#publicationList";

/// Resolve the author stubs held in `node[key]` against the person list
fn joined_authors(node: &Value, key: &str, persons: &[Value]) -> TranslateResult<Vec<Person>> {
    let stubs = as_slice(node.get(key).unwrap_or(&Value::Null));
    Ok(resolve_references(stubs, persons)?
        .into_iter()
        .map(Person::from_node)
        .collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinimetaTranslator;

impl MinimetaTranslator {
    fn publications(graph: &Graph<'_>, persons: &[Value]) -> TranslateResult<Vec<Publication>> {
        graph
            .list_of(PUBLICATION_LIST_ID)
            .unwrap_or_default()
            .iter()
            .map(|publication| -> TranslateResult<Publication> {
                let text = |key: &str| publication.get(key).and_then(as_text);
                Ok(Publication {
                    publication_type: text("@type"),
                    title: text("headline"),
                    doi: as_doi_url(publication.get("sameAs").and_then(Value::as_str)),
                    date_published: text("datePublished"),
                    authors: joined_authors(publication, "author", persons)?,
                    publication_outlet: publication.pointer("/publication/name").and_then(as_text),
                })
            })
            .collect()
    }
}

impl SourceTranslator for MinimetaTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        &DESCRIPTOR
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        let graph = Graph::from_metadata(&record.extracted_metadata)?;
        let dataset = graph.select_by_type("Dataset").ok_or_else(|| {
            TranslateError::MalformedRecord("graph has no Dataset node".to_string())
        })?;
        let persons = graph.list_of(PERSON_LIST_ID).unwrap_or_default();
        let text = |key: &str| dataset.get(key).and_then(as_text);

        let funding = as_slice(dataset.get("funder").unwrap_or(&Value::Null))
            .iter()
            .filter_map(|funder| funder.get("name").and_then(as_text))
            .map(|name| Funding { name })
            .collect();

        Ok(CatalogFields {
            name: Some(text("name").unwrap_or_default()),
            description: text("description"),
            url: text("url").map(Url::Single),
            authors: joined_authors(dataset, "author", persons)?,
            keywords: string_list(dataset.get("keywords")),
            funding,
            publications: Self::publications(&graph, persons)?,
            subdatasets: subdatasets(dataset),
            ..CatalogFields::default()
        })
    }
}
