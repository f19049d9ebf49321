//! MEDLINE/PubMed (nbib) reference translator

use serde_json::Value;
use uuid::Uuid;

use super::normalize::{as_doi_url, as_text, first_token, other, string_list};
use super::{extract_references, ReferenceFields, SourceTranslator, TranslatorDescriptor, CITATION_SCHEMA_RANGE};
use crate::error::TranslateResult;
use crate::models::{CatalogFields, ExtractedRecord, Person};

pub static DESCRIPTOR: TranslatorDescriptor = TranslatorDescriptor {
    name: "nbib",
    extractor_name: "we_nbib",
    extractor_id: Some(Uuid::from_u128(0x4b898c36_3ff0_4d65_b858_765a3ca83376)),
    schema_range: CITATION_SCHEMA_RANGE,
    max_extractor_version: None,
};

/// PubMed lists publication types alphabetically; nearly every citation
/// carries one of these, checked in this order
const COMMON_TYPES: [&str; 4] = ["Journal Article", "Letter", "Editorial", "News"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NbibTranslator;

impl NbibTranslator {
    fn author(entry: &Value) -> Person {
        let text = |key: &str| entry.get(key).and_then(as_text);
        let mut person = Person {
            name: text("author"),
            ..Person::default()
        };
        // given and family names only travel together
        if let (Some(given), Some(family)) = (text("first_name"), text("last_name")) {
            person.given_name = Some(given);
            person.family_name = Some(family);
        }
        person
    }
}

impl ReferenceFields for NbibTranslator {
    fn publication_type(&self, reference: &Value) -> Option<String> {
        let types = string_list(reference.get("publication_types"));
        if types.is_empty() {
            return None;
        }
        let common = COMMON_TYPES
            .iter()
            .find(|common| types.iter().any(|t| t.as_str() == **common));
        Some(match common {
            Some(t) => t.to_string(),
            None => other(&types.join("; ")),
        })
    }

    fn title(&self, reference: &Value) -> Option<String> {
        reference.get("title").and_then(as_text)
    }

    fn doi(&self, reference: &Value) -> Option<String> {
        as_doi_url(reference.get("doi").and_then(Value::as_str))
    }

    fn date_published(&self, reference: &Value) -> Option<String> {
        reference
            .get("publication_date")
            .and_then(as_text)
            .and_then(|date| first_token(&date).map(String::from))
    }

    fn authors(&self, reference: &Value) -> Vec<Person> {
        reference
            .get("authors")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .map(Self::author)
                    .filter(|person| !person.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn publication_outlet(&self, reference: &Value) -> Option<String> {
        reference.get("journal").and_then(as_text)
    }
}

impl SourceTranslator for NbibTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        &DESCRIPTOR
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        extract_references(self, record)
    }
}
