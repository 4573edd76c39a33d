// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Reads the sstubs JSON file from disk into a Vec<RawRecord>.
//
// How the dataset file looks:
//   One top-level JSON array, one object per bug-fix example:
//
//   [
//     { "before": "a=1", "after": "a=2",
//       "commitSHA1": "abc123", "projectName": "demo", ... },
//     ...
//   ]
//
// The loader guarantees:
//   - the returned Vec preserves file order
//   - its length equals the length of the JSON array
//   - a missing file raises NotFound, never an empty dataset
//   - malformed JSON or a wrong top-level shape raises Parse
//
// Parsing happens in two stages:
//   1. The whole file → serde_json::Value
//      (any syntax error is a Parse error here)
//   2. Shape checks + per-element RawRecord deserialisation
//      (a top-level object or a non-object element is a
//       Parse error naming exactly what was wrong)
//
// A single full read into memory is fine at this scale —
// the dataset is loaded once per run and never mutated.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use std::{fs, io::ErrorKind, path::PathBuf};

use crate::domain::error::PrepError;
use crate::domain::raw_record::RawRecord;
use crate::domain::traits::RecordSource;

/// Loads the raw bug-fix corpus from a single JSON array file.
/// Implements the RecordSource trait from Layer 3.
pub struct JsonDatasetLoader {
    /// Path to the dataset file, e.g. datasets/sstubsLarge.json
    path: PathBuf,
}

impl JsonDatasetLoader {
    /// Create a new loader pointed at a dataset file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonDatasetLoader {
    fn load_all(&self) -> Result<Vec<RawRecord>, PrepError> {
        let path_display = self.path.display().to_string();

        // ── Stage 1: Read the file ────────────────────────────────────────────
        // A missing file is its own error category so callers can
        // tell "wrong path" apart from "broken file content".
        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                PrepError::NotFound { path: path_display.clone() }
            } else {
                PrepError::Io { path: path_display.clone(), source: e }
            }
        })?;

        // ── Stage 2: Parse to a generic JSON value ────────────────────────────
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| PrepError::Parse(format!("'{path_display}': {e}")))?;

        // ── Stage 3: Enforce the top-level shape ──────────────────────────────
        // The dataset must be an array; a top-level object means
        // the wrong file (or format) was supplied — refuse to proceed.
        let elements = value.as_array().ok_or_else(|| {
            PrepError::Parse(format!(
                "'{path_display}': expected a top-level JSON array of records"
            ))
        })?;

        // ── Stage 4: Deserialise each element in order ────────────────────────
        // from_value keeps the element index available for the
        // error message; iteration order preserves file order.
        let mut records = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let record: RawRecord =
                serde_json::from_value(element.clone()).map_err(|e| {
                    PrepError::Parse(format!(
                        "'{path_display}': element {index} is not a record object: {e}"
                    ))
                })?;
            records.push(record);
        }

        tracing::info!("Loaded {} records from '{}'", records.len(), path_display);
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// These tests write real files into a tempdir so the full
// read-then-parse path is exercised, not just the parsing.
#[cfg(test)]
mod tests {
    use super::*;

    fn write_dataset(content: &str) -> (tempfile::TempDir, JsonDatasetLoader) {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("sstubs.json");
        fs::write(&path, content).unwrap();
        (dir, JsonDatasetLoader::new(path))
    }

    #[test]
    fn test_preserves_order_and_length() {
        let (_dir, loader) = write_dataset(
            r#"[
                {"before":"a=1","after":"a=2","commitSHA1":"c1"},
                {"before":"b=1","after":"b=2","commitSHA1":"c2"},
                {"before":"c=1","after":"c=2","commitSHA1":"c3"}
            ]"#,
        );
        let records = loader.load_all().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].commit_sha1.as_deref(), Some("c1"));
        assert_eq!(records[2].commit_sha1.as_deref(), Some("c3"));
    }

    #[test]
    fn test_missing_file_is_not_found_not_empty() {
        let loader = JsonDatasetLoader::new("datasets/does_not_exist.json");
        let err    = loader.load_all().unwrap_err();
        assert!(matches!(err, PrepError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let (_dir, loader) = write_dataset("[{\"before\": ");
        let err = loader.load_all().unwrap_err();
        assert!(matches!(err, PrepError::Parse(_)));
    }

    #[test]
    fn test_top_level_object_is_rejected() {
        // A JSON object is valid JSON but the wrong dataset shape
        let (_dir, loader) = write_dataset(r#"{"before":"x"}"#);
        let err = loader.load_all().unwrap_err();

        match err {
            PrepError::Parse(msg) => assert!(msg.contains("top-level JSON array")),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_element_is_rejected_with_its_index() {
        let (_dir, loader) = write_dataset(r#"[{"before":"x"}, 42]"#);
        let err = loader.load_all().unwrap_err();

        match err {
            PrepError::Parse(msg) => assert!(msg.contains("element 1")),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn test_record_missing_a_key_still_loads() {
        // Required-key enforcement is the projector's job —
        // the loader accepts any well-formed array of objects
        let (_dir, loader) = write_dataset(r#"[{"before":"x","after":"y"}]"#);
        let records = loader.load_all().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].commit_sha1.is_none());
    }
}
