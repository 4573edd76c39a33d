// ============================================================
// Layer 3 — Error Taxonomy
// ============================================================
// One enum covering every way the preparation pipeline can fail:
//
//   NotFound     — the dataset file does not exist on disk
//   Io           — the file exists but cannot be read
//   Parse        — the file is not valid JSON, or the JSON has
//                  the wrong shape (e.g. top-level object
//                  instead of an array)
//   FieldMissing — a record is missing one of the three
//                  required keys (before / after / commitSHA1)
//   External     — the tokenizer framework failed (bad model
//                  identifier, network error, encoding error)
//
// Why a typed enum instead of anyhow everywhere?
//   Callers need to tell "bad input file" apart from
//   "bad record shape" apart from "external service failure".
//   A string inside anyhow::Error can't be matched on;
//   an enum variant can. The application layer still wraps
//   these in anyhow::Result — anyhow preserves the concrete
//   type for downcasting.
//
// Nothing is recovered locally: every variant propagates to
// main() and terminates the process with a non-zero status.
//
// Reference: Rust Book §9 (Error Handling)
//            thiserror crate documentation

use thiserror::Error;

/// All error categories raised by the preparation pipeline.
#[derive(Debug, Error)]
pub enum PrepError {
    /// The dataset file does not exist at the given path.
    /// Raised instead of silently returning an empty dataset.
    #[error("dataset file not found: '{path}'")]
    NotFound { path: String },

    /// The dataset file exists but reading it failed
    /// (permission denied, broken disk, etc.)
    #[error("cannot read dataset file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON, or the JSON value
    /// has the wrong shape for a dataset
    #[error("malformed dataset: {0}")]
    Parse(String),

    /// A record is missing one of the required keys.
    /// Carries the zero-based index of the offending record
    /// so the user can find it in the source file.
    #[error("record {index}: required field '{field}' is missing")]
    FieldMissing { index: usize, field: &'static str },

    /// The external tokenizer framework failed —
    /// model identifier resolution, download, or encoding
    #[error("tokenizer error: {0}")]
    External(String),
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_missing_names_record_and_field() {
        let err = PrepError::FieldMissing { index: 7, field: "commitSHA1" };
        let msg = err.to_string();
        assert!(msg.contains("record 7"));
        assert!(msg.contains("commitSHA1"));
    }

    #[test]
    fn test_categories_are_distinguishable_after_anyhow_wrapping() {
        // The application layer returns anyhow::Result —
        // the concrete category must survive the wrapping
        let wrapped: anyhow::Error =
            PrepError::NotFound { path: "datasets/missing.json".into() }.into();

        let downcast = wrapped.downcast_ref::<PrepError>();
        assert!(matches!(downcast, Some(PrepError::NotFound { .. })));
    }
}
