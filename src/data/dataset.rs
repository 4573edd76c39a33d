// ============================================================
// Layer 4 — Fix Dataset
// ============================================================
// The fine-tuning handoff: a Vec of tokenized samples exposed
// through Burn's Dataset trait so a downstream DataLoader can
// call .get(index) and .len() on it.
//
// Sequences are truncated (by the tokenizer) but NOT padded
// here — samples in the same dataset may have different
// lengths. Padding to a common length is the batcher's job,
// per batch, so short batches don't pay for the longest
// sequence in the whole corpus.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One tokenized bug-fix example, ready for batching.
/// The id/mask schema is whatever the tokenizer produced —
/// this crate passes it through without interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixSample {
    /// Token ids for the (before, after) pair, truncated to
    /// the configured maximum sequence length
    pub input_ids: Vec<u32>,

    /// Attention mask as returned by the tokenizer
    /// (1 = real token; no padding exists at this stage)
    pub attention_mask: Vec<u32>,

    /// The originating commit id — kept for traceability so a
    /// sample can be mapped back to its source record
    pub commit: String,
}

pub struct FixDataset {
    samples: Vec<FixSample>,
}

impl FixDataset {
    pub fn new(samples: Vec<FixSample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<FixSample> for FixDataset {
    fn get(&self, index: usize) -> Option<FixSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ids: &[u32], commit: &str) -> FixSample {
        FixSample {
            input_ids:      ids.to_vec(),
            attention_mask: vec![1; ids.len()],
            commit:         commit.into(),
        }
    }

    #[test]
    fn test_get_returns_samples_by_index() {
        let dataset = FixDataset::new(vec![sample(&[1, 2], "c1"), sample(&[3], "c2")]);

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(1).unwrap().commit, "c2");
        assert!(dataset.get(2).is_none());
    }
}
