// ============================================================
// Layer 4 — Record Projector
// ============================================================
// Maps each RawRecord to its ProjectedRecord: keep `before`
// and `after`, rename `commitSHA1` to `commitNum`, drop every
// other key.
//
// Guarantees:
//   - output length == input length, same order (1:1 mapping)
//   - `before` / `after` are moved through byte-identical
//   - no defaults are ever substituted for missing fields
//
// Missing-field policy (explicit and consistent):
//   WHOLE-BATCH FAIL-FAST. The first record missing a required
//   key aborts the projection with a FieldMissing error that
//   carries the record's zero-based index and the field name.
//   The alternative — skipping bad records — would silently
//   change the dataset size, which the length invariant above
//   forbids.
//
// The projector is a pure function over the loaded dataset:
// no I/O, no hidden state, so projecting the same dataset
// twice yields identical output.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Rust Book §9 (Error Handling)

use crate::domain::error::PrepError;
use crate::domain::projected_record::ProjectedRecord;
use crate::domain::raw_record::RawRecord;

/// Project a full dataset. Fails on the first record missing a
/// required key; otherwise returns one ProjectedRecord per
/// RawRecord in the same order.
pub fn project_records(records: &[RawRecord]) -> Result<Vec<ProjectedRecord>, PrepError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| project_one(index, record))
        .collect()
}

/// Project a single record, reporting `index` on failure.
fn project_one(index: usize, record: &RawRecord) -> Result<ProjectedRecord, PrepError> {
    // require() pins down WHICH field was absent — a plain
    // Option::ok_or here would lose the field name
    let before = require(index, "before", &record.before)?;
    let after  = require(index, "after", &record.after)?;
    let commit = require(index, "commitSHA1", &record.commit_sha1)?;

    Ok(ProjectedRecord {
        before:     before.clone(),
        after:      after.clone(),
        commit_num: commit.clone(),
    })
}

/// Turn an absent required field into a FieldMissing error.
fn require<'a>(
    index: usize,
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a String, PrepError> {
    value
        .as_ref()
        .ok_or(PrepError::FieldMissing { index, field })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// Build a RawRecord with all three required keys present
    fn raw(before: &str, after: &str, commit: &str) -> RawRecord {
        RawRecord {
            before:      Some(before.to_string()),
            after:       Some(after.to_string()),
            commit_sha1: Some(commit.to_string()),
            extra:       serde_json::Map::new(),
        }
    }

    #[test]
    fn test_projects_all_fields_verbatim() {
        let projected = project_records(&[raw("a=1", "a=2", "abc123")]).unwrap();

        assert_eq!(projected.len(), 1);
        assert_eq!(projected[0].before, "a=1");
        assert_eq!(projected[0].after, "a=2");
        assert_eq!(projected[0].commit_num, "abc123");
    }

    #[test]
    fn test_extra_keys_are_dropped() {
        // Bookkeeping keys from the raw record must be absent
        // from the projected output
        let mut record = raw("a=1", "a=2", "abc123");
        record.extra.insert("extra".into(), serde_json::json!("ignored"));

        let projected = project_records(&[record]).unwrap();
        let json      = serde_json::to_value(&projected[0]).unwrap();

        assert!(json.get("extra").is_none());
        assert_eq!(
            json,
            serde_json::json!({"before":"a=1","after":"a=2","commitNum":"abc123"})
        );
    }

    #[test]
    fn test_never_adds_or_drops_records() {
        let records: Vec<RawRecord> = (0..25)
            .map(|i| raw(&format!("x={i}"), &format!("x={}", i + 1), &format!("c{i}")))
            .collect();

        let projected = project_records(&records).unwrap();
        assert_eq!(projected.len(), records.len());

        // Order is preserved record by record
        for (i, p) in projected.iter().enumerate() {
            assert_eq!(p.commit_num, format!("c{i}"));
        }
    }

    #[test]
    fn test_missing_commit_is_a_field_missing_error() {
        // Must raise, never return commitNum: None / ""
        let record = RawRecord {
            before:      Some("x".into()),
            after:       Some("y".into()),
            commit_sha1: None,
            extra:       serde_json::Map::new(),
        };

        let err = project_records(&[raw("a", "b", "c"), record]).unwrap_err();
        assert!(matches!(
            err,
            PrepError::FieldMissing { index: 1, field: "commitSHA1" }
        ));
    }

    #[test]
    fn test_missing_before_is_reported_by_name() {
        let record = RawRecord {
            before:      None,
            after:       Some("y".into()),
            commit_sha1: Some("c".into()),
            extra:       serde_json::Map::new(),
        };

        let err = project_records(&[record]).unwrap_err();
        assert!(matches!(
            err,
            PrepError::FieldMissing { index: 0, field: "before" }
        ));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let records = vec![raw("a=1", "a=2", "c1"), raw("b=1", "b=2", "c2")];

        let first  = project_records(&records).unwrap();
        let second = project_records(&records).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_dataset_projects_to_empty() {
        let projected = project_records(&[]).unwrap();
        assert!(projected.is_empty());
    }
}
