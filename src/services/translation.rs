//! Translation service: one extracted record in, one catalog record out

use serde_json::Value;

use crate::{
    config::CatalogConfig,
    error::TranslateResult,
    models::{CatalogRecord, ExtractedRecord, ProvenanceStyle, Version},
    translators::{assembler, Registry, SourceTranslator},
};

/// Translates records for one catalog schema version.
///
/// Holds no per-record state; a single service can translate any number
/// of records in any order.
#[derive(Debug, Clone)]
pub struct TranslationService {
    registry: Registry,
    schema_version: Version,
}

impl TranslationService {
    pub fn new(schema_version: Version) -> Self {
        Self::with_registry(Registry::default(), schema_version)
    }

    pub fn with_registry(registry: Registry, schema_version: Version) -> Self {
        Self {
            registry,
            schema_version,
        }
    }

    /// Service for the schema version named in the configuration
    pub fn from_config(config: &CatalogConfig) -> TranslateResult<Self> {
        Ok(Self::new(config.schema_version.parse()?))
    }

    pub fn schema_version(&self) -> &Version {
        &self.schema_version
    }

    /// Dispatch, extract and assemble a parsed record
    pub fn translate_record(&self, record: &ExtractedRecord) -> TranslateResult<CatalogRecord> {
        let translator = self.registry.resolve(record, &self.schema_version)?;
        let fields = translator.extract(record)?;
        let style = ProvenanceStyle::for_schema(&self.schema_version);
        Ok(assembler::assemble(record, fields, style))
    }

    /// Translate a raw JSON record into its catalog JSON
    pub fn translate(&self, raw: &Value) -> TranslateResult<Value> {
        let record = ExtractedRecord::from_value(raw)?;
        let catalog = self.translate_record(&record)?;
        assembler::to_catalog_value(&catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;
    use crate::translators::{nbib::NbibTranslator, Translator};
    use serde_json::json;

    fn ris_record() -> Value {
        json!({
            "type": "dataset",
            "dataset_id": "5df8eb3a-95c5-11ea-b4b9-a0369f287950",
            "dataset_version": "0321dbde969d2f5d6b533e35b5c5c51ac0b15758",
            "extractor_name": "we_ris",
            "extractor_version": "0.5.2",
            "extraction_parameter": {},
            "extraction_time": 1654178322.5,
            "agent_name": "Jane Doe",
            "agent_email": "jane@example.com",
            "extracted_metadata": {"refs": [{
                "type_of_reference": "JOUR",
                "title": "Results",
                "doi": "10.1/xyz",
                "year": "2019"
            }]}
        })
    }

    #[test]
    fn test_translate_citation_record() {
        let service = TranslationService::new(Version::new(1, 0, 0));
        let catalog = service.translate(&ris_record()).unwrap();

        assert_eq!(catalog["type"], "dataset");
        assert_eq!(catalog["name"], "");
        assert_eq!(
            catalog["publications"],
            json!([{
                "type": "Journal Article",
                "title": "Results",
                "doi": "https://doi.org/10.1/xyz",
                "datePublished": "2019"
            }])
        );
        assert_eq!(
            catalog["metadata_sources"]["key_source_map"],
            json!({"name": ["we_ris"], "publications": ["we_ris"]})
        );
    }

    #[test]
    fn test_translate_is_idempotent() {
        let service = TranslationService::new(Version::new(1, 0, 0));
        let first = serde_json::to_string(&service.translate(&ris_record()).unwrap()).unwrap();
        let second = serde_json::to_string(&service.translate(&ris_record()).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_legacy_schema_uses_extractors_used() {
        let service = TranslationService::new(Version::new(0, 9, 0));
        let raw = json!({
            "type": "dataset",
            "dataset_id": "5df8eb3a-95c5-11ea-b4b9-a0369f287950",
            "dataset_version": "0321dbde969d2f5d6b533e35b5c5c51ac0b15758",
            "extractor_name": "metalad_core",
            "extractor_version": "1",
            "extracted_metadata": {"@graph": []}
        });
        let catalog = service.translate(&raw).unwrap();
        assert_eq!(catalog["extractors_used"][0]["extractor_name"], "metalad_core");
        assert!(catalog.get("metadata_sources").is_none());
    }

    #[test]
    fn test_errors_surface_per_record() {
        let service = TranslationService::new(Version::new(1, 0, 0));

        let mut raw = ris_record();
        raw["extractor_name"] = json!("we_bibtex");
        assert!(service.translate(&raw).unwrap_err().is_unrecognized());

        let mut raw = ris_record();
        raw.as_object_mut().unwrap().remove("dataset_id");
        assert!(matches!(
            service.translate(&raw),
            Err(TranslateError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_custom_registry() {
        let registry = Registry::new(vec![Translator::Nbib(NbibTranslator)]);
        let service = TranslationService::with_registry(registry, Version::new(1, 0, 0));
        assert!(service.translate(&ris_record()).unwrap_err().is_unrecognized());

        let mut raw = ris_record();
        raw["extractor_name"] = json!("we_nbib");
        assert_eq!(service.translate(&raw).unwrap()["publications"][0]["title"], "Results");
    }

    #[test]
    fn test_from_config_rejects_bad_version() {
        let config = CatalogConfig {
            schema_version: "one".to_string(),
        };
        assert!(matches!(
            TranslationService::from_config(&config),
            Err(TranslateError::InvalidVersion(_))
        ));
    }
}
