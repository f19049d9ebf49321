//! Command line tests

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn line(extractor_name: &str) -> String {
    json!({
        "type": "dataset",
        "dataset_id": "5df8eb3a-95c5-11ea-b4b9-a0369f287950",
        "dataset_version": "0321dbde969d2f5d6b533e35b5c5c51ac0b15758",
        "extractor_name": extractor_name,
        "extractor_version": "0.5.2",
        "extracted_metadata": {"refs": [{"type_of_reference": "JOUR", "title": "Results"}]}
    })
    .to_string()
}

fn command() -> Command {
    let mut cmd = Command::cargo_bin("catalog-translate").unwrap();
    cmd.env_remove("RUN_MODE").env("RUST_LOG", "catalog_translate=warn");
    cmd
}

#[test]
fn test_stdin_to_stdout() {
    let input = format!("{}\n{}\n", line("we_ris"), line("we_bibtex"));
    let output = command().write_stdin(input).assert().success().get_output().stdout.clone();

    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["publications"][0]["type"], "Journal Article");
    assert!(lines[0].get("metadata_sources").is_some());
}

#[test]
fn test_abort_on_unrecognized() {
    command()
        .args(["--on-unrecognized", "abort"])
        .write_stdin(format!("{}\n", line("we_bibtex")))
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_schema_version_flag() {
    command()
        .args(["--schema-version", "0.9"])
        .write_stdin(format!("{}\n", line("we_ris")))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    command()
        .args(["--schema-version", "latest"])
        .write_stdin(String::new())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version"));
}

#[test]
fn test_files_and_append() {
    let dir = tempfile::tempdir().unwrap();
    let infile = dir.path().join("records.jsonl");
    let outfile = dir.path().join("catalog.jsonl");
    fs::write(&infile, format!("{}\n", line("we_ris"))).unwrap();

    for _ in 0..2 {
        command()
            .arg("--infile")
            .arg(&infile)
            .arg("--outfile")
            .arg(&outfile)
            .assert()
            .success();
    }

    let written = fs::read_to_string(&outfile).unwrap();
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn test_missing_infile() {
    command()
        .args(["--infile", "/nonexistent/records.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}
