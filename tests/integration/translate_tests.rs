//! End-to-end translation through the public API

use serde_json::{json, Value};

use catalog_translate::models::Version;
use catalog_translate::{TranslateError, TranslationService};

const DATASET_ID: &str = "5df8eb3a-95c5-11ea-b4b9-a0369f287950";
const DATASET_VERSION: &str = "0321dbde969d2f5d6b533e35b5c5c51ac0b15758";

fn service() -> TranslationService {
    TranslationService::new(Version::new(1, 0, 0))
}

fn record(extractor_name: &str, extractor_version: &str, metadata: Value) -> Value {
    json!({
        "type": "dataset",
        "dataset_id": DATASET_ID,
        "dataset_version": DATASET_VERSION,
        "extractor_name": extractor_name,
        "extractor_version": extractor_version,
        "extraction_parameter": {},
        "extraction_time": 1654178322.5,
        "agent_name": "Jane Doe",
        "agent_email": "jane@example.com",
        "extracted_metadata": metadata
    })
}

fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(map) => map.values().any(contains_null),
        _ => false,
    }
}

#[test]
fn test_ris_record() {
    let raw = record(
        "we_ris",
        "0.5.2",
        json!({"refs": [
            {"type_of_reference": "XYZZY", "primary_title": "Unmapped", "doi": null},
            {"type_of_reference": "JOUR", "title": "Mapped",
             "doi": "https://doi.org/10.1/xyz", "authors": ["Doe, J."],
             "journal_name": "J. Data", "year": "2019"}
        ]}),
    );
    let catalog = service().translate(&raw).unwrap();
    assert!(!contains_null(&catalog));

    assert_eq!(catalog["dataset_id"], DATASET_ID);
    assert_eq!(catalog["dataset_version"], DATASET_VERSION);
    assert_eq!(
        catalog["publications"],
        json!([
            {"type": "Other (XYZZY)", "title": "Unmapped"},
            {"type": "Journal Article", "title": "Mapped",
             "doi": "https://doi.org/10.1/xyz", "datePublished": "2019",
             "authors": [{"name": "Doe, J."}], "publicationOutlet": "J. Data"}
        ])
    );
}

#[test]
fn test_nbib_record() {
    let raw = record(
        "we_nbib",
        "0.5.2",
        json!({"refs": [
            {"publication_types": ["Review", "Journal Article"],
             "title": "Reviewed", "publication_date": "2019 Jan-Feb",
             "doi": "10.1/nbib", "journal": "Brain",
             "authors": [{"author": "Doe, Jane", "first_name": "Jane", "last_name": "Doe"}]},
            {"publication_types": ["Review"], "title": "Only a review"}
        ]}),
    );
    let catalog = service().translate(&raw).unwrap();
    assert!(!contains_null(&catalog));
    let publications = &catalog["publications"];

    assert_eq!(publications[0]["type"], "Journal Article");
    assert_eq!(publications[0]["datePublished"], "2019");
    assert_eq!(publications[0]["doi"], "https://doi.org/10.1/nbib");
    assert_eq!(
        publications[0]["authors"],
        json!([{"name": "Doe, Jane", "givenName": "Jane", "familyName": "Doe"}])
    );
    assert_eq!(publications[1]["type"], "Other (Review)");
    assert!(publications[1].get("doi").is_none());
}

#[test]
fn test_crossref_record() {
    let raw = record(
        "we_crossref",
        "0.1.0",
        json!({"refs": [{
            "DOI": "10.1000/xyz123",
            "type": "journal-article",
            "title": ["A <i>Study</i> of\nThings   Done"],
            "issued": {"date-parts": [[2020, 6]]}
        }]}),
    );
    let catalog = service().translate(&raw).unwrap();
    assert!(!contains_null(&catalog));
    assert_eq!(
        catalog["publications"],
        json!([{
            "type": "Journal Article",
            "title": "A Study of Things Done",
            "doi": "https://doi.org/10.1000/xyz123",
            "datePublished": "2020-06"
        }])
    );
}

#[test]
fn test_cff_record() {
    let raw = record(
        "we_cff",
        "0.0.1",
        json!({
            "cff-version": "1.2.0",
            "title": "My Research Software",
            "abstract": "Does research",
            "doi": "10.5281/zenodo.1234",
            "license": "Apache-2.0",
            "repository-code": "https://github.com/example/software",
            "keywords": ["research"],
            "authors": [{"given-names": "Stephan", "family-names": "Druskat",
                         "orcid": "https://orcid.org/0000-0003-4925-7248"}]
        }),
    );
    let catalog = service().translate(&raw).unwrap();
    assert!(!contains_null(&catalog));

    assert_eq!(catalog["name"], "My Research Software");
    assert_eq!(catalog["description"], "Does research");
    assert_eq!(catalog["doi"], "https://doi.org/10.5281/zenodo.1234");
    assert_eq!(
        catalog["license"],
        json!({"name": "Apache-2.0", "url": "https://spdx.org/licenses/Apache-2.0.html"})
    );
    assert_eq!(catalog["url"], "https://github.com/example/software");
    assert_eq!(catalog["authors"][0]["identifiers"][0]["type"], "ORCID");
    assert_eq!(
        catalog["metadata_sources"]["sources"][0]["agent_email"],
        "jane@example.com"
    );
}

#[test]
fn test_cff_extractor_too_new() {
    let raw = record("we_cff", "0.1.0", json!({"title": "x"}));
    assert!(service().translate(&raw).unwrap_err().is_unrecognized());
}

#[test]
fn test_minimeta_graph_join() {
    let raw = record(
        "metalad_studyminimeta",
        "0.1",
        json!({"@graph": [
            {"@id": "datalad:0321dbde", "@type": "Dataset", "name": "Study",
             "author": [{"@id": "#a1"}]},
            {"@id": "#personList", "@list": [{"@id": "#a1", "@type": "Person", "name": "X"}]}
        ]}),
    );
    let catalog = service().translate(&raw).unwrap();
    assert!(!contains_null(&catalog));
    assert_eq!(catalog["authors"], json!([{"name": "X"}]));

    let raw = record(
        "metalad_studyminimeta",
        "0.1",
        json!({"@graph": [
            {"@id": "datalad:0321dbde", "@type": "Dataset", "author": [{"@id": "#a1"}, {"@id": "#a9"}]},
            {"@id": "#personList", "@list": [{"@id": "#a1", "@type": "Person", "name": "X"}]}
        ]}),
    );
    assert!(matches!(
        service().translate(&raw),
        Err(TranslateError::UnresolvedReference(_))
    ));
}

#[test]
fn test_datacite_record_on_legacy_schema() {
    let raw = record(
        "datacite_gin",
        "0.1",
        json!({"title": "Recordings", "keywords": ["ephys"]}),
    );
    let catalog = TranslationService::new(Version::new(0, 2, 0))
        .translate(&raw)
        .unwrap();
    assert!(!contains_null(&catalog));
    assert_eq!(catalog["name"], "Recordings");
    assert_eq!(
        catalog["extractors_used"],
        json!([{
            "extractor_name": "datacite_gin",
            "extractor_version": "0.1",
            "extraction_parameter": {},
            "extraction_time": 1654178322.5
        }])
    );
}

#[test]
fn test_identifier_beats_name() {
    let mut raw = record(
        "we_nbib",
        "0.5.2",
        json!({"refs": [{"type_of_reference": "JOUR", "title": "RIS shaped"}]}),
    );
    raw["extractor_id"] = json!("81076796-4e6e-428b-b5c2-79ba9f3e6a05");
    let catalog = service().translate(&raw).unwrap();
    assert!(!contains_null(&catalog));
    assert_eq!(catalog["publications"][0]["type"], "Journal Article");
}

#[test]
fn test_translation_is_byte_identical() {
    let raw = record(
        "metalad_core",
        "1",
        json!({"@graph": [
            {"@id": "#agent", "@type": "agent", "name": "Jane Doe"},
            {"@id": "datalad:0321dbde", "@type": "Dataset",
             "distribution": [{"url": "https://github.com/example/ds"}]}
        ]}),
    );
    let service = service();
    let catalog = service.translate(&raw).unwrap();
    assert!(!contains_null(&catalog));
    assert_eq!(catalog["authors"], json!([{"name": "Jane Doe"}]));

    let first = serde_json::to_vec(&catalog).unwrap();
    let second = serde_json::to_vec(&service.translate(&raw).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_required_key() {
    for key in ["type", "dataset_id", "dataset_version", "extracted_metadata"] {
        let mut raw = record("we_ris", "0.5.2", json!({"refs": []}));
        raw.as_object_mut().unwrap().remove(key);
        assert!(
            matches!(service().translate(&raw), Err(TranslateError::MalformedRecord(_))),
            "{key}"
        );
    }
}
