//! Source translators
//!
//! One translator per extractor output format. Each declares which
//! extractor it accepts and for which catalog schema versions, and turns
//! an extracted record into catalog fields.

pub mod assembler;
pub mod cff;
pub mod crossref;
pub mod datacite;
pub mod metalad_core;
pub mod minimeta;
pub mod nbib;
pub mod normalize;
pub mod registry;
pub mod ris;

use serde_json::Value;
use uuid::Uuid;

use crate::error::{TranslateError, TranslateResult};
use crate::models::{CatalogFields, ExtractedRecord, Person, Publication, Version, VersionRange};

pub use registry::Registry;

/// Schema range of the citation and CFF translators
pub const CITATION_SCHEMA_RANGE: VersionRange =
    VersionRange::new(Version::new(1, 0, 0), Version::new(1, 1, 0));

/// Schema range of the metalad and DataCite translators
pub const LEGACY_SCHEMA_RANGE: VersionRange =
    VersionRange::new(Version::new(0, 1, 0), Version::new(1, 1, 0));

/// Which extractor output a translator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorDescriptor {
    /// Short translator name, used in logs and errors
    pub name: &'static str,
    pub extractor_name: &'static str,
    /// Stable extractor identifier; preferred over the name when supplied
    pub extractor_id: Option<Uuid>,
    pub schema_range: VersionRange,
    /// Exclusive upper bound on the extractor version
    pub max_extractor_version: Option<Version>,
}

impl TranslatorDescriptor {
    /// Whether this translator accepts records of the given source under
    /// the given catalog schema version.
    ///
    /// `source_id` is expected to be already filtered to identifiers some
    /// translator recognizes (see [`Registry::dispatch`]).
    pub fn matches(
        &self,
        schema_version: &Version,
        source_name: &str,
        source_version: &str,
        source_id: Option<&Uuid>,
    ) -> bool {
        let identity = match (source_id, self.extractor_id) {
            (Some(id), Some(own)) => *id == own,
            (Some(_), None) => false,
            (None, _) => source_name == self.extractor_name,
        };
        if !identity {
            return false;
        }

        if !self.schema_range.contains(schema_version) {
            tracing::debug!(
                "Translator {} rejects schema {} (supports {})",
                self.name,
                schema_version,
                self.schema_range
            );
            return false;
        }

        match self.max_extractor_version {
            None => true,
            Some(max) => source_version
                .parse::<Version>()
                .map(|v| v < max)
                .unwrap_or(false),
        }
    }
}

/// Common capability of every translator
pub trait SourceTranslator {
    fn descriptor(&self) -> &'static TranslatorDescriptor;

    /// Extract catalog fields; absent values stay absent
    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields>;
}

/// Field getters over one citation reference
pub trait ReferenceFields {
    fn publication_type(&self, reference: &Value) -> Option<String>;
    fn title(&self, reference: &Value) -> Option<String>;
    fn doi(&self, reference: &Value) -> Option<String>;
    fn date_published(&self, reference: &Value) -> Option<String>;
    fn authors(&self, reference: &Value) -> Vec<Person>;
    fn publication_outlet(&self, reference: &Value) -> Option<String>;

    fn publication(&self, reference: &Value) -> Publication {
        Publication {
            publication_type: self.publication_type(reference),
            title: self.title(reference),
            doi: self.doi(reference),
            date_published: self.date_published(reference),
            authors: self.authors(reference),
            publication_outlet: self.publication_outlet(reference),
        }
    }
}

/// Translate a record holding a `refs` list into one publication per ref
pub(crate) fn extract_references<T: ReferenceFields>(
    fields: &T,
    record: &ExtractedRecord,
) -> TranslateResult<CatalogFields> {
    let refs = record
        .extracted_metadata
        .get("refs")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            TranslateError::MalformedRecord("extracted_metadata has no refs list".to_string())
        })?;

    Ok(CatalogFields {
        // the catalog requires a string name; citation files carry none
        name: Some(String::new()),
        publications: refs.iter().map(|r| fields.publication(r)).collect(),
        ..CatalogFields::default()
    })
}

/// The closed set of translators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translator {
    Ris(ris::RisTranslator),
    Nbib(nbib::NbibTranslator),
    Crossref(crossref::CrossrefTranslator),
    Cff(cff::CffTranslator),
    MetaladCore(metalad_core::MetaladCoreTranslator),
    Minimeta(minimeta::MinimetaTranslator),
    Datacite(datacite::DataciteTranslator),
}

impl Translator {
    /// Every translator, in registration order
    pub fn all() -> Vec<Translator> {
        vec![
            Translator::Ris(ris::RisTranslator),
            Translator::Nbib(nbib::NbibTranslator),
            Translator::Crossref(crossref::CrossrefTranslator),
            Translator::Cff(cff::CffTranslator),
            Translator::MetaladCore(metalad_core::MetaladCoreTranslator),
            Translator::Minimeta(minimeta::MinimetaTranslator),
            Translator::Datacite(datacite::DataciteTranslator),
        ]
    }

    fn inner(&self) -> &dyn SourceTranslator {
        match self {
            Translator::Ris(t) => t,
            Translator::Nbib(t) => t,
            Translator::Crossref(t) => t,
            Translator::Cff(t) => t,
            Translator::MetaladCore(t) => t,
            Translator::Minimeta(t) => t,
            Translator::Datacite(t) => t,
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }
}

impl SourceTranslator for Translator {
    fn descriptor(&self) -> &'static TranslatorDescriptor {
        self.inner().descriptor()
    }

    fn extract(&self, record: &ExtractedRecord) -> TranslateResult<CatalogFields> {
        self.inner().extract(record)
    }
}
