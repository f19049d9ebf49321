//! JSON-LD graph querying
//!
//! This module provides the node selection and reference joins used by
//! translators whose sources are JSON-LD documents.

pub mod graph;

pub use graph::{as_slice, has_type, node_id, resolve_references, strip_namespace_prefix, Graph};
