//! Catalog record (translation output) and its composite fields

use serde::Serialize;

use super::person::Person;
use super::provenance::Provenance;
use super::publication::Publication;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Funding {
    pub name: String,
}

/// Reference to a dataset contained in the translated one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subdataset {
    pub dataset_id: String,
    pub dataset_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<String>,
    pub dirs_from_path: Vec<String>,
}

/// Dataset landing page(s); sources give either one URL or several
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Url {
    Single(String),
    Many(Vec<String>),
}

/// Descriptive fields a translator extracts from one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Person>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<Publication>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub funding: Vec<Funding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subdatasets: Vec<Subdataset>,
}

impl CatalogFields {
    /// Catalog keys that carry a value, in output order
    pub fn present_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.name.is_some() {
            keys.push("name");
        }
        if self.description.is_some() {
            keys.push("description");
        }
        if self.doi.is_some() {
            keys.push("doi");
        }
        if self.license.is_some() {
            keys.push("license");
        }
        if !self.authors.is_empty() {
            keys.push("authors");
        }
        if !self.keywords.is_empty() {
            keys.push("keywords");
        }
        if !self.publications.is_empty() {
            keys.push("publications");
        }
        if !self.funding.is_empty() {
            keys.push("funding");
        }
        if self.url.is_some() {
            keys.push("url");
        }
        if !self.subdatasets.is_empty() {
            keys.push("subdatasets");
        }
        keys
    }
}

/// Record in the unified catalog schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub dataset_id: String,
    pub dataset_version: String,
    #[serde(flatten)]
    pub fields: CatalogFields,
    #[serde(flatten)]
    pub provenance: Provenance,
}
