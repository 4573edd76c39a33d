// ============================================================
// Layer 3 — ProjectedRecord Domain Type
// ============================================================
// The minimal view of a bug-fix record that the tokenizer
// actually consumes: exactly the two text fields plus the
// commit identifier, everything else dropped.
//
// Field renaming:
//   The source dataset calls the commit id `commitSHA1`;
//   the projected form calls it `commitNum`. The serde rename
//   attribute keeps the Rust field snake_case while the JSON
//   form matches the downstream convention.
//
// Invariants:
//   - Every ProjectedRecord corresponds 1:1 to one RawRecord
//   - `before` and `after` are byte-identical to the source
//   - No field is ever invented or defaulted
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// The reduced before/after/commit view of a RawRecord.
/// All three fields are guaranteed present — the projector
/// refuses to construct one otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRecord {
    /// Source text before the bug fix (verbatim from the raw record)
    pub before: String,

    /// Source text after the bug fix (verbatim from the raw record)
    pub after: String,

    /// The originating commit id, renamed from `commitSHA1`
    #[serde(rename = "commitNum")]
    pub commit_num: String,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialises_commit_num_under_renamed_key() {
        let rec = ProjectedRecord {
            before:     "a=1".into(),
            after:      "a=2".into(),
            commit_num: "abc123".into(),
        };
        let json = serde_json::to_value(&rec).unwrap();

        assert_eq!(json["commitNum"], "abc123");
        // The raw spelling must not leak through
        assert!(json.get("commitSHA1").is_none());
    }
}
