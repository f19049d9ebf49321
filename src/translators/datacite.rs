//! datacite_gin translator (DataCite-like dataset description)
//!
//! The extractor emits a flat mapping. Graph-shaped output is accepted
//! too, in which case fields are read from the Dataset node.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::normalize::{as_doi_url, as_text, string_list};
use super::{SourceTranslator, TranslatorDescriptor, LEGACY_SCHEMA_RANGE};
use crate::error::{TranslateError, TranslateResult};
use crate::jsonld::{as_slice, Graph};
use crate::models::{
    CatalogFields, ExtractedRecord, Funding, Identifier, License, Person, Publication,
};

pub static DESCRIPTOR: TranslatorDescriptor = TranslatorDescriptor {
    name: "datacite",
    extractor_name: "datacite_gin",
    extractor_id: None,
    schema_range: LEGACY_SCHEMA_RANGE,
    max_extractor_version: None,
};

static DOI_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^doi:\s*").expect("valid doi regex"));

/// DOI URL from a reference id such as `doi:10.1/xyz`; ids of other
/// schemes are not DOIs
fn reference_doi(id: &str) -> Option<String> {
    let bare = DOI_SCHEME.replace(id.trim(), "");
    if bare.starts_with("10.") || bare.contains("://") {
        as_doi_url(Some(&*bare))
    } else {
        None
    }
}

fn license(root: &Value) -> Option<License> {
    let license = root.get("license")?;
    let name = license.get("name").and_then(as_text);
    let url = license.get("url").and_then(as_text);
    match (name, url) {
        (None, None) => None,
        (name, url) => Some(License {
            name: name.unwrap_or_default(),
            url: url.unwrap_or_default(),
        }),
    }
}

fn author(entry: &Value) -> Person {
    let text = |key: &str| entry.get(key).and_then(as_text);
    let given_name = text("firstname");
    let family_name = text("lastname");

    let parts: Vec<&str> = [given_name.as_deref(), family_name.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    let name = if parts.is_empty() { None } else { Some(parts.join(" ")) };

    // ids look like "ORCID:0000-0002-1825-0097"
    let identifiers = text("id")
        .and_then(|id| {
            id.split_once(':').map(|(id_type, identifier)| Identifier {
                id_type: id_type.trim().to_string(),
                identifier: identifier.trim().to_string(),
            })
        })
        .into_iter()
        .collect();

    Person {
        name,
        given_name,
        family_name,
        email: None,
        identifiers,
    }
}

fn publication(reference: &Value) -> Publication {
    Publication {
        publication_type: reference.get("reftype").and_then(as_text),
        title: reference.get("citation").and_then(as_text),
        doi: reference.get("id").and_then(Value::as_str).and_then(reference_doi),
        ..Publication::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataciteTranslator;

impl SourceTranslator for DataciteTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        &DESCRIPTOR
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        let metadata = &record.extracted_metadata;
        let root = if metadata.get("@graph").is_some() {
            Graph::from_metadata(metadata)?
                .select_by_type("Dataset")
                .ok_or_else(|| {
                    TranslateError::MalformedRecord("graph has no Dataset node".to_string())
                })?
        } else {
            metadata
        };
        let list = |key: &str| as_slice(root.get(key).unwrap_or(&Value::Null));

        Ok(CatalogFields {
            name: Some(root.get("title").and_then(as_text).unwrap_or_default()),
            description: root.get("description").and_then(as_text),
            license: license(root),
            authors: list("authors")
                .iter()
                .map(author)
                .filter(|person| !person.is_empty())
                .collect(),
            keywords: string_list(root.get("keywords")),
            funding: string_list(root.get("funding"))
                .into_iter()
                .map(|name| Funding { name })
                .collect(),
            publications: list("references").iter().map(publication).collect(),
            ..CatalogFields::default()
        })
    }
}
