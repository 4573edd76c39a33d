// ============================================================
// Layer 3 — RawRecord Domain Type
// ============================================================
// Represents one untouched entry of the source JSON dataset.
//
// The sstubs corpus ("single statement bugs") is a JSON array
// of objects. Each object describes one minimal bug fix:
//   - `before`     — the source line before the fix
//   - `after`      — the same line after the fix
//   - `commitSHA1` — the commit that introduced the fix
// plus a number of bookkeeping keys (project name, file path,
// bug pattern, ...) that this pipeline never uses.
//
// Why are the three required fields Option<String>?
//   Presence of the required keys is a SCHEMA concern and the
//   projector's job, not the parser's. Modelling them as
//   Option lets the loader accept any well-formed array of
//   objects, while the projector raises a precise
//   FieldMissing error (with the record index) for whatever
//   is absent. A non-Option field would instead surface as an
//   opaque serde parse error during loading.
//
// RawRecords are created once by parsing the dataset file and
// never mutated afterwards.
//
// Reference: Rust Book §5 (Structs)
//            serde documentation (flatten, rename)

use serde::{Deserialize, Serialize};

/// One untouched entry from the source JSON bug-fix dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    /// Source text before the bug fix
    pub before: Option<String>,

    /// Source text after the bug fix
    pub after: Option<String>,

    /// Identifier of the originating commit.
    /// The dataset spells this key `commitSHA1`.
    #[serde(rename = "commitSHA1")]
    pub commit_sha1: Option<String>,

    /// Every other key of the record, carried opaquely.
    /// The projector drops these — they exist here only so a
    /// RawRecord round-trips the source entry unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialises_required_and_extra_keys() {
        let json = r#"{
            "before": "a=1", "after": "a=2",
            "commitSHA1": "abc123", "projectName": "demo"
        }"#;
        let rec: RawRecord = serde_json::from_str(json).unwrap();

        assert_eq!(rec.before.as_deref(), Some("a=1"));
        assert_eq!(rec.after.as_deref(), Some("a=2"));
        assert_eq!(rec.commit_sha1.as_deref(), Some("abc123"));
        // Unused keys land in the extra map, untouched
        assert_eq!(rec.extra["projectName"], "demo");
    }

    #[test]
    fn test_missing_keys_become_none_not_a_parse_error() {
        // Schema enforcement belongs to the projector,
        // so a record without commitSHA1 must still parse
        let rec: RawRecord =
            serde_json::from_str(r#"{"before":"x","after":"y"}"#).unwrap();
        assert!(rec.commit_sha1.is_none());
    }
}
