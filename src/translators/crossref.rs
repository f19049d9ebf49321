//! Crossref work translator
//!
//! Each ref is one work as returned in `message.items` by the Crossref
//! REST API.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use uuid::Uuid;

use super::normalize::{as_doi_url, as_text, first_present, lookup_or_other, string_list};
use super::{extract_references, ReferenceFields, SourceTranslator, TranslatorDescriptor, CITATION_SCHEMA_RANGE};
use crate::error::TranslateResult;
use crate::models::{CatalogFields, ExtractedRecord, Identifier, Person};

pub static DESCRIPTOR: TranslatorDescriptor = TranslatorDescriptor {
    name: "crossref",
    extractor_name: "we_crossref",
    extractor_id: Some(Uuid::from_u128(0x579e1483_47e7_4ed6_a06c_179418e1a12e)),
    schema_range: CITATION_SCHEMA_RANGE,
    max_extractor_version: None,
};

const TYPE_MAP: &[(&str, &str)] = &[
    ("journal-article", "Journal Article"),
    ("book-chapter", "Book Section"),
    ("proceedings-article", "Conference Paper"),
    ("posted-content", "Preprint"),
    ("dissertation", "Thesis"),
    ("book", "Book"),
    ("monograph", "Book"),
    ("report", "Report"),
    ("dataset", "Dataset"),
    ("component", "Computer program"),
];

/// Dates in order of preference
const DATE_KEYS: [&str; 4] = ["published", "published-print", "published-online", "issued"];

// Single open, close or self-closing tag without spaces. Doubled brackets
// are matched too so they can be left alone.
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<{1,2}/?[A-Za-z][A-Za-z0-9:\-]*/?>{1,2}").expect("valid tag regex")
});
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {3,}").expect("valid space regex"));

/// Strip inline markup from a title and flatten its whitespace
pub fn sanitize_title(title: &str) -> String {
    let stripped = TAG.replace_all(title, |caps: &Captures<'_>| {
        let tag = &caps[0];
        if tag.starts_with("<<") || tag.ends_with(">>") {
            tag.to_string()
        } else {
            String::new()
        }
    });
    let flattened = stripped.replace("\r\n", " ").replace('\n', " ");
    SPACE_RUN.replace_all(&flattened, " ").into_owned()
}

/// Identifier part of an ORCID URL (`https://orcid.org/0000-...` -> `0000-...`)
fn orcid_path(orcid: &str) -> Option<String> {
    let path = match orcid.split_once("://") {
        Some((_, rest)) => rest.find('/').map(|i| &rest[i..]).unwrap_or(""),
        None => orcid,
    };
    let path = path.trim_matches('/');
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

/// Render `{"date-parts": [[2019, 3, 5]]}` as `2019-03-05`
fn render_date_parts(date: &Value) -> Option<String> {
    let parts = date.get("date-parts")?.get(0)?.as_array()?;
    let numbers: Vec<u64> = parts.iter().map_while(Value::as_u64).collect();
    let (year, rest) = numbers.split_first()?;

    let mut rendered = year.to_string();
    for part in rest.iter().take(2) {
        rendered.push_str(&format!("-{:02}", part));
    }
    Some(rendered)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrossrefTranslator;

impl CrossrefTranslator {
    fn author(entry: &Value) -> Person {
        let text = |key: &str| entry.get(key).and_then(as_text);
        let given_name = text("given");
        let family_name = text("family");

        let full_name: Vec<&str> = [given_name.as_deref(), family_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let name = if full_name.is_empty() {
            // organisations carry a single name
            text("name")
        } else {
            Some(full_name.join(" "))
        };

        let identifiers = entry
            .get("ORCID")
            .and_then(Value::as_str)
            .and_then(orcid_path)
            .map(|id| vec![Identifier::orcid(id)])
            .unwrap_or_default();

        Person {
            name,
            given_name,
            family_name,
            email: None,
            identifiers,
        }
    }
}

impl ReferenceFields for CrossrefTranslator {
    fn publication_type(&self, reference: &Value) -> Option<String> {
        reference
            .get("type")
            .and_then(as_text)
            .map(|code| lookup_or_other(TYPE_MAP, &code))
    }

    fn title(&self, reference: &Value) -> Option<String> {
        string_list(reference.get("title"))
            .first()
            .map(|title| sanitize_title(title))
    }

    fn doi(&self, reference: &Value) -> Option<String> {
        as_doi_url(reference.get("DOI").and_then(Value::as_str))
    }

    fn date_published(&self, reference: &Value) -> Option<String> {
        first_present(reference, &DATE_KEYS).and_then(render_date_parts)
    }

    fn authors(&self, reference: &Value) -> Vec<Person> {
        reference
            .get("author")
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
        string_list(reference.get("container-title")).into_iter().next()
    }
}

impl SourceTranslator for CrossrefTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        &DESCRIPTOR
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        extract_references(self, record)
    }
}
