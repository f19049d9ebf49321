//! Value normalization shared by all translators

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Resolver prepended to bare DOIs
pub const DOI_RESOLVER: &str = "https://doi.org/";

static URL_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("valid scheme regex"));

/// Value of the first key, in order, that is present and not null
pub fn first_present<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|value| !value.is_null()))
}

/// Like [`first_present`], rendered as text
pub fn first_present_text(record: &Value, keys: &[&str]) -> Option<String> {
    first_present(record, keys).and_then(as_text)
}

/// Text of a scalar value; numbers are rendered, other shapes are absent
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// String entries of a list value, or a lone string as a one-element list
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Turn a DOI into a resolvable URL.
///
/// Values that already carry a URL scheme are returned unchanged.
pub fn as_doi_url(doi: Option<&str>) -> Option<String> {
    let doi = doi.map(str::trim).filter(|d| !d.is_empty())?;
    if URL_SCHEME.is_match(doi) {
        Some(doi.to_string())
    } else {
        Some(format!("{}{}", DOI_RESOLVER, doi))
    }
}

/// Leading whitespace-delimited token, e.g. the year of "2019 Jan-Feb"
pub fn first_token(value: &str) -> Option<&str> {
    value.split_whitespace().next()
}

/// Map a vocabulary code through a fixed table; unknown codes are kept
/// verbatim in a generic fallback
pub fn lookup_or_other(table: &[(&str, &str)], code: &str) -> String {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| other(code))
}

/// Generic label for vocabulary no table knows
pub fn other(code: &str) -> String {
    format!("Other ({})", code)
}

/// Copy of `map` without null values, empty lists or empty objects
pub fn drop_empty(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            Value::Object(entries) => !entries.is_empty(),
            _ => true,
        })
        .collect()
}
