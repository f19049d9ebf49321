//! Translation services

pub mod pipeline;
pub mod translation;

pub use pipeline::{BatchReport, Pipeline};
pub use translation::TranslationService;
