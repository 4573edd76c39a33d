// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// The dry-run half of the pipeline: load and project only,
// no tokenizer, no network. Useful for checking a dataset
// file before committing to a (slow) hub download.
//
// Reuses exactly the same loader and projector as the
// prepare workflow, so whatever inspect accepts, prepare
// will accept too.
//
// Reference: Rust Book §7 (Module System)

use anyhow::Result;

use crate::data::{loader::JsonDatasetLoader, projector::project_records};
use crate::domain::projected_record::ProjectedRecord;
use crate::domain::traits::RecordSource;

/// What an inspection run reports back to the CLI.
pub struct InspectReport {
    /// Total number of records in the dataset file
    pub record_count: usize,

    /// The first projected record, as a shape preview
    /// (None for an empty dataset)
    pub first: Option<ProjectedRecord>,
}

pub struct InspectUseCase {
    dataset_path: String,
}

impl InspectUseCase {
    pub fn new(dataset_path: impl Into<String>) -> Self {
        Self { dataset_path: dataset_path.into() }
    }

    /// Load and project the dataset, reporting its size and a
    /// preview of the first record.
    pub fn execute(&self) -> Result<InspectReport> {
        let loader  = JsonDatasetLoader::new(&self.dataset_path);
        let records = loader.load_all()?;

        // Same projection (and same failure policy) as prepare
        let projected = project_records(&records)?;

        Ok(InspectReport {
            record_count: projected.len(),
            first:        projected.first().cloned(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_count_and_first_record() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("sstubs.json");
        std::fs::write(
            &path,
            r#"[
                {"before":"a=1","after":"a=2","commitSHA1":"c1","extra":"ignored"},
                {"before":"b=1","after":"b=2","commitSHA1":"c2"}
            ]"#,
        )
        .unwrap();

        let report = InspectUseCase::new(path.to_string_lossy()).execute().unwrap();

        assert_eq!(report.record_count, 2);
        let first = report.first.unwrap();
        assert_eq!(first.commit_num, "c1");
    }

    #[test]
    fn test_empty_dataset_has_no_preview() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("sstubs.json");
        std::fs::write(&path, "[]").unwrap();

        let report = InspectUseCase::new(path.to_string_lossy()).execute().unwrap();

        assert_eq!(report.record_count, 0);
        assert!(report.first.is_none());
    }
}
