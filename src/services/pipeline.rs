//! JSON lines batch pipeline

use std::io::{BufRead, Write};

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use super::translation::TranslationService;
use crate::config::{FailurePolicy, PipelineConfig};
use crate::error::{TranslateError, TranslateResult};

/// Counts of a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub translated: usize,
    pub skipped_unrecognized: usize,
    pub failed: usize,
}

/// Translates a stream of records, one JSON object per line, applying the
/// configured policy to records that cannot be translated
#[derive(Debug, Clone)]
pub struct Pipeline {
    service: TranslationService,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(service: TranslationService, config: PipelineConfig) -> Self {
        Self { service, config }
    }

    fn translate_line(&self, line: &str) -> TranslateResult<Value> {
        let raw: Value = serde_json::from_str(line)
            .map_err(|e| TranslateError::MalformedRecord(format!("invalid JSON: {}", e)))?;
        self.service.translate(&raw)
    }

    /// Decode one raw line; undecodable bytes are a malformed record, not a
    /// read failure
    fn decode_line(bytes: Vec<u8>) -> TranslateResult<String> {
        let mut line = String::from_utf8(bytes)
            .map_err(|e| TranslateError::MalformedRecord(format!("invalid UTF-8: {}", e)))?;
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> anyhow::Result<BatchReport> {
        let mut report = BatchReport::default();

        for (index, bytes) in input.split(b'\n').enumerate() {
            let line_number = index + 1;
            let bytes = bytes.with_context(|| format!("Failed to read line {}", line_number))?;

            let translated = match Self::decode_line(bytes) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.translate_line(&line),
                Err(e) => Err(e),
            };

            match translated {
                Ok(catalog) => {
                    serde_json::to_writer(&mut output, &catalog)?;
                    output.write_all(b"\n")?;
                    report.translated += 1;
                }
                Err(e) => {
                    let policy = if e.is_unrecognized() {
                        self.config.on_unrecognized
                    } else {
                        self.config.on_error
                    };
                    if policy == FailurePolicy::Abort {
                        return Err(anyhow::Error::new(e).context(format!("Aborting at line {}", line_number)));
                    }

                    tracing::warn!(line = line_number, kind = e.kind(), "Skipping record: {}", e);
                    if e.is_unrecognized() {
                        report.skipped_unrecognized += 1;
                    } else {
                        report.failed += 1;
                    }
                }
            }
        }

        output.flush()?;
        Ok(report)
    }
}
