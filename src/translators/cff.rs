//! Citation File Format (CITATION.cff) translator
//!
//! CFF describes the dataset itself rather than a list of references, so
//! this translator fills dataset-level fields. Its `preferred-citation`
//! and `references` entries become publications.

use serde_json::Value;
use uuid::Uuid;

use super::normalize::{as_doi_url, as_text, first_present_text, first_token, lookup_or_other, string_list};
use super::{ReferenceFields, SourceTranslator, TranslatorDescriptor, CITATION_SCHEMA_RANGE};
use crate::error::TranslateResult;
use crate::models::{CatalogFields, ExtractedRecord, Identifier, License, Person, Publication, Url, Version};

pub static DESCRIPTOR: TranslatorDescriptor = TranslatorDescriptor {
    name: "cff",
    extractor_name: "we_cff",
    extractor_id: Some(Uuid::from_u128(0xb7089877_25f8_4f51_a4d0_de54da0f8ac3)),
    schema_range: CITATION_SCHEMA_RANGE,
    max_extractor_version: Some(Version::new(0, 1, 0)),
};

const REFERENCE_TYPE_MAP: &[(&str, &str)] = &[
    ("article", "Journal Article"),
    ("book", "Book"),
    ("software", "Computer program"),
    ("thesis", "Thesis"),
    ("report", "Report"),
    ("conference-paper", "Conference Paper"),
    ("dataset", "Dataset"),
    ("generic", "Generic"),
];

const SPDX_LICENSE_URL: &str = "https://spdx.org/licenses";

/// DOI of a CFF document or reference: the `doi` shorthand first, then the
/// first `identifiers` entry of type `doi`
pub fn cff_doi(entry: &Value) -> Option<String> {
    if let Some(doi) = entry.get("doi").and_then(Value::as_str) {
        return as_doi_url(Some(doi));
    }

    entry
        .get("identifiers")
        .and_then(Value::as_array)?
        .iter()
        .find(|identifier| identifier.get("type").and_then(Value::as_str) == Some("doi"))
        .and_then(|identifier| as_doi_url(identifier.get("value").and_then(Value::as_str)))
}

/// License name and URL.
///
/// A single SPDX id gets its spdx.org page as URL unless one is given; a
/// list of ids becomes one `OR` expression with an empty URL unless given.
pub fn cff_license(metadata: &Value) -> Option<License> {
    let url = metadata.get("license-url").and_then(Value::as_str).map(String::from);

    match metadata.get("license")? {
        Value::String(id) => Some(License {
            name: id.clone(),
            url: url.unwrap_or_else(|| format!("{}/{}.html", SPDX_LICENSE_URL, id)),
        }),
        Value::Array(_) => {
            let ids = string_list(metadata.get("license"));
            if ids.is_empty() {
                return None;
            }
            Some(License {
                name: ids.join(" OR "),
                url: url.unwrap_or_default(),
            })
        }
        _ => None,
    }
}

/// Catalog person from a CFF person or entity.
///
/// The catalog has no particle or suffix, so they are folded into the
/// family name.
pub fn cff_author(entry: &Value) -> Person {
    let text = |key: &str| entry.get(key).and_then(as_text);

    let family_name = text("family-names").map(|family| {
        [text("name-particle"), Some(family), text("name-suffix")]
            .into_iter()
            .flatten()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    });

    let identifiers = text("orcid")
        .map(|orcid| vec![Identifier::orcid(orcid)])
        .unwrap_or_default();

    Person {
        name: text("name"),
        given_name: text("given-names"),
        family_name,
        email: text("email"),
        identifiers,
    }
}

fn cff_authors(entry: &Value) -> Vec<Person> {
    entry
        .get("authors")
        .and_then(Value::as_array)
        .map(|authors| {
            authors
                .iter()
                .map(cff_author)
                .filter(|person| !person.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Getters over one CFF reference (`preferred-citation` or `references[]`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CffReference;

impl ReferenceFields for CffReference {
    fn publication_type(&self, reference: &Value) -> Option<String> {
        reference
            .get("type")
            .and_then(as_text)
            .map(|code| lookup_or_other(REFERENCE_TYPE_MAP, &code))
    }

    fn title(&self, reference: &Value) -> Option<String> {
        reference.get("title").and_then(as_text)
    }

    fn doi(&self, reference: &Value) -> Option<String> {
        cff_doi(reference)
    }

    fn date_published(&self, reference: &Value) -> Option<String> {
        reference.get("year").and_then(as_text).or_else(|| {
            reference
                .get("date-published")
                .and_then(as_text)
                .and_then(|date| first_token(&date).map(String::from))
        })
    }

    fn authors(&self, reference: &Value) -> Vec<Person> {
        cff_authors(reference)
    }

    fn publication_outlet(&self, reference: &Value) -> Option<String> {
        reference
            .get("journal")
            .and_then(as_text)
            .or_else(|| reference.pointer("/conference/name").and_then(as_text))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CffTranslator;

impl CffTranslator {
    fn publications(metadata: &Value) -> Vec<Publication> {
        let preferred = metadata.get("preferred-citation").filter(|v| v.is_object());
        let references = metadata
            .get("references")
            .and_then(Value::as_array)
            .map(|refs| refs.as_slice())
            .unwrap_or_default();

        preferred
            .into_iter()
            .chain(references)
            .map(|reference| CffReference.publication(reference))
            .collect()
    }
}

impl SourceTranslator for CffTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        &DESCRIPTOR
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        let metadata = &record.extracted_metadata;

        Ok(CatalogFields {
            // obligatory in the catalog, must be a string
            name: Some(metadata.get("title").and_then(as_text).unwrap_or_default()),
            description: metadata.get("abstract").and_then(as_text),
            doi: cff_doi(metadata),
            license: cff_license(metadata),
            authors: cff_authors(metadata),
            keywords: string_list(metadata.get("keywords")),
            publications: Self::publications(metadata),
            url: first_present_text(metadata, &["repository-code", "url"]).map(Url::Single),
            ..CatalogFields::default()
        })
    }
}
