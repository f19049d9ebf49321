//! Translator registry: picks the one translator for a record

use uuid::Uuid;

use super::{SourceTranslator, Translator};
use crate::error::{TranslateError, TranslateResult};
use crate::models::{ExtractedRecord, Version};

/// Ordered set of translators consulted on dispatch
#[derive(Debug, Clone)]
pub struct Registry {
    translators: Vec<Translator>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(Translator::all())
    }
}

impl Registry {
    pub fn new(translators: Vec<Translator>) -> Self {
        Self { translators }
    }

    /// Whether some registered translator declares this extractor id
    pub fn recognizes(&self, source_id: &Uuid) -> bool {
        self.translators
            .iter()
            .any(|t| t.descriptor().extractor_id.as_ref() == Some(source_id))
    }

    /// Find the single translator accepting a source under a schema version.
    ///
    /// A recognized `source_id` takes precedence over the name; an unknown
    /// one is ignored and the name decides.
    pub fn dispatch(
        &self,
        schema_version: &Version,
        source_name: &str,
        source_version: &str,
        source_id: Option<&Uuid>,
    ) -> TranslateResult<&Translator> {
        let source_id = source_id.filter(|id| {
            let known = self.recognizes(id);
            if !known {
                tracing::debug!("Extractor id {} is not recognized, matching by name", id);
            }
            known
        });

        let candidates: Vec<&Translator> = self
            .translators
            .iter()
            .filter(|t| {
                t.descriptor()
                    .matches(schema_version, source_name, source_version, source_id)
            })
            .collect();

        match candidates.as_slice() {
            [] => Err(TranslateError::UnrecognizedSource {
                name: source_name.to_string(),
                version: source_version.to_string(),
            }),
            [translator] => {
                tracing::debug!(
                    "Dispatching {} {} to translator {}",
                    source_name,
                    source_version,
                    translator.name()
                );
                Ok(*translator)
            }
            many => Err(TranslateError::AmbiguousSource {
                name: source_name.to_string(),
                candidates: many.iter().map(|t| t.name()).collect(),
            }),
        }
    }

    /// Dispatch on the source fields of a record
    pub fn resolve(
        &self,
        record: &ExtractedRecord,
        schema_version: &Version,
    ) -> TranslateResult<&Translator> {
        self.dispatch(
            schema_version,
            &record.extractor_name,
            &record.extractor_version,
            record.source_id().as_ref(),
        )
    }
}
