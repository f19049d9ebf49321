//! RIS reference translator
//!
//! Field names follow the reader's RIS tag mapping. Reference managers
//! disagree on which tag holds the title, date and outlet, so those fall
//! back between two names.

use serde_json::Value;
use uuid::Uuid;

use super::normalize::{as_doi_url, as_text, first_present, first_present_text, lookup_or_other, string_list};
use super::{extract_references, ReferenceFields, SourceTranslator, TranslatorDescriptor, CITATION_SCHEMA_RANGE};
use crate::error::TranslateResult;
use crate::models::{CatalogFields, ExtractedRecord, Person};

pub static DESCRIPTOR: TranslatorDescriptor = TranslatorDescriptor {
    name: "ris",
    extractor_name: "we_ris",
    extractor_id: Some(Uuid::from_u128(0x81076796_4e6e_428b_b5c2_79ba9f3e6a05)),
    schema_range: CITATION_SCHEMA_RANGE,
    max_extractor_version: None,
};

const TYPE_MAP: &[(&str, &str)] = &[
    ("JOUR", "Journal Article"),
    ("CHAP", "Book Section"),
    ("THES", "Thesis"),
    ("COMP", "Computer program"),
    ("GEN", "Generic"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RisTranslator;

impl ReferenceFields for RisTranslator {
    fn publication_type(&self, reference: &Value) -> Option<String> {
        reference
            .get("type_of_reference")
            .and_then(as_text)
            .map(|code| lookup_or_other(TYPE_MAP, &code))
    }

    fn title(&self, reference: &Value) -> Option<String> {
        first_present_text(reference, &["title", "primary_title"])
    }

    fn doi(&self, reference: &Value) -> Option<String> {
        as_doi_url(reference.get("doi").and_then(Value::as_str))
    }

    fn date_published(&self, reference: &Value) -> Option<String> {
        first_present_text(reference, &["year", "publication_year"])
    }

    fn authors(&self, reference: &Value) -> Vec<Person> {
        string_list(first_present(reference, &["authors", "first_authors"]))
            .into_iter()
            .map(Person::named)
            .collect()
    }

    fn publication_outlet(&self, reference: &Value) -> Option<String> {
        first_present_text(reference, &["journal_name", "secondary_title"])
    }
}

impl SourceTranslator for RisTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        &DESCRIPTOR
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        extract_references(self, record)
    }
}
