//! Catalog metadata translation
//!
//! Translates records produced by metadata extractors (citation files,
//! CITATION.cff, JSON-LD graphs, DataCite descriptions) into the unified
//! catalog schema. A registry picks one translator per record from the
//! extractor identity and the catalog schema version in force.

pub mod config;
pub mod error;
pub mod jsonld;
pub mod models;
pub mod services;
pub mod translators;

pub use config::AppConfig;
pub use error::{TranslateError, TranslateResult};
pub use services::{BatchReport, Pipeline, TranslationService};
