//! JSON-LD graph queries
//!
//! A graph is the flat `@graph` array of one document. Nodes reference
//! each other through `{"@id": ...}` stubs; lookups are exact string
//! comparisons on `@id` and `@type`.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{TranslateError, TranslateResult};

/// Read-only view over the nodes of one JSON-LD document
#[derive(Debug, Clone, Copy)]
pub struct Graph<'a> {
    nodes: &'a [Value],
}

impl<'a> Graph<'a> {
    pub fn new(nodes: &'a [Value]) -> Self {
        Self { nodes }
    }

    /// Build a graph from extracted metadata holding an `@graph` array
    pub fn from_metadata(metadata: &'a Value) -> TranslateResult<Self> {
        metadata
            .get("@graph")
            .and_then(Value::as_array)
            .map(|nodes| Self::new(nodes))
            .ok_or_else(|| {
                TranslateError::MalformedRecord("extracted_metadata has no @graph array".to_string())
            })
    }

    /// First node of the given `@type`
    pub fn select_by_type(&self, type_name: &str) -> Option<&'a Value> {
        self.nodes.iter().find(|node| has_type(node, type_name))
    }

    /// All nodes of the given `@type`, in document order
    pub fn select_all_by_type<'t>(&self, type_name: &'t str) -> impl Iterator<Item = &'a Value> + 't
    where
        'a: 't,
    {
        self.nodes.iter().filter(move |node| has_type(node, type_name))
    }

    /// Node with the given `@id`
    pub fn select_by_id(&self, id: &str) -> Option<&'a Value> {
        self.nodes.iter().find(|node| node_id(node) == Some(id))
    }

    /// Items of the `@list` held by the node with the given `@id`
    pub fn list_of(&self, id: &str) -> Option<&'a [Value]> {
        self.select_by_id(id)
            .and_then(|node| node.get("@list"))
            .map(as_slice)
    }
}

/// The `@id` of a node or stub
pub fn node_id(node: &Value) -> Option<&str> {
    node.get("@id").and_then(Value::as_str)
}

/// Whether a node's `@type` is, or contains, `type_name`
pub fn has_type(node: &Value, type_name: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == type_name,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(type_name)),
        _ => false,
    }
}

/// View a JSON-LD property as a list: arrays as-is, a single value as a
/// one-element list, null or absent as empty
pub fn as_slice(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        Value::Null => &[],
        other => std::slice::from_ref(other),
    }
}

/// Replace `{"@id": ref}` stubs by the detail nodes they point to.
///
/// Order follows `stubs`. A stub with no matching detail node fails the
/// whole join so that a partial author list never escapes.
pub fn resolve_references<'a>(
    stubs: &[Value],
    details: &'a [Value],
) -> TranslateResult<Vec<&'a Value>> {
    let mut index: IndexMap<&str, &'a Value> = IndexMap::with_capacity(details.len());
    for node in details {
        if let Some(id) = node_id(node) {
            index.entry(id).or_insert(node);
        }
    }

    stubs
        .iter()
        .enumerate()
        .map(|(position, stub)| {
            let id = node_id(stub).ok_or_else(|| {
                TranslateError::UnresolvedReference(format!(
                    "reference at position {} has no @id",
                    position
                ))
            })?;
            index.get(id).copied().ok_or_else(|| {
                TranslateError::UnresolvedReference(format!(
                    "no node with @id '{}' (position {})",
                    id, position
                ))
            })
        })
        .collect()
}

/// Strip a literal namespace prefix such as `datalad:` from an identifier
pub fn strip_namespace_prefix<'s>(value: &'s str, prefix: &str) -> &'s str {
    value.strip_prefix(prefix).unwrap_or(value)
}
