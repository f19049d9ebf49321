//! Data models for catalog translation

pub mod catalog;
pub mod person;
pub mod provenance;
pub mod publication;
pub mod record;
pub mod version;

// Re-export commonly used types
pub use catalog::{CatalogFields, CatalogRecord, Funding, License, Subdataset, Url};
pub use person::{Identifier, Person};
pub use provenance::{Provenance, ProvenanceStyle};
pub use publication::Publication;
pub use record::ExtractedRecord;
pub use version::{Version, VersionRange};
