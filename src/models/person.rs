//! Person model (authors of datasets and publications)

use serde::Serialize;
use serde_json::Value;

/// A typed identifier of a person, e.g. an ORCID
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    #[serde(rename = "type")]
    pub id_type: String,
    pub identifier: String,
}

impl Identifier {
    pub fn orcid(identifier: impl Into<String>) -> Self {
        Self {
            id_type: "ORCID".to_string(),
            identifier: identifier.into(),
        }
    }
}

/// Catalog person record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
}

impl Person {
    /// Person known only by a bare name string
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Person from a JSON-LD node (`agent` or `Person`)
    pub fn from_node(node: &Value) -> Self {
        let text = |key: &str| node.get(key).and_then(Value::as_str).map(String::from);
        Self {
            name: text("name"),
            given_name: text("givenName"),
            family_name: text("familyName"),
            email: text("email"),
            identifiers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.given_name.is_none()
            && self.family_name.is_none()
            && self.email.is_none()
            && self.identifiers.is_empty()
    }
}
