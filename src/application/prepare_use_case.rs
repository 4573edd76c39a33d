// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Load the JSON dataset     (Layer 4 - data)
//   Step 2: Project the records      (Layer 4 - data)
//   Step 3: Resolve the tokenizer    (Layer 5 - infra)
//   Step 4: Encode (before, after)   (Layer 4 - data)
//   Step 5: Build the Burn dataset   (Layer 4 - data)
//
// Execution is single-threaded and synchronous: each step
// fully completes before the next begins. There are no
// retries and no intermediate persisted state — any error
// aborts the run and propagates out of main().
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §4 (Datasets)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::FixDataset,
    encoder::FixEncoder,
    loader::JsonDatasetLoader,
    projector::project_records,
};
use crate::domain::traits::RecordSource;
use crate::infra::tokenizer_hub::pretrained_tokenizer;

// ─── Preparation Configuration ───────────────────────────────────────────────
// All knobs for a preparation run.
// Serialisable so a run's configuration can be recorded.
//
// Note the distinction: `model_id` is a model IDENTIFIER
// string used to fetch the tokenizer — at no point does this
// pipeline hold a loaded model instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub dataset_path: String,
    pub model_id:     String,
    pub max_seq_len:  usize,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            dataset_path: "datasets/sstubsLarge.json".to_string(),
            model_id:     "microsoft/CodeGPT-small-java-adaptedGPT2".to_string(),
            max_seq_len:  512,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
// Owns the config and runs the full preparation pipeline.
pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    /// Create a new PrepareUseCase with the given configuration
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end and return the
    /// tokenized dataset ready for a fine-tuning DataLoader.
    pub fn execute(&self) -> Result<FixDataset> {
        let cfg = &self.config;

        // ── Step 1: Load the raw dataset ──────────────────────────────────────
        // One file read; order and length mirror the JSON array
        tracing::info!("Loading dataset from '{}'", cfg.dataset_path);
        let loader  = JsonDatasetLoader::new(&cfg.dataset_path);
        let records = loader.load_all()?;
        tracing::info!("Loaded {} raw records", records.len());

        // ── Step 2: Project down to before/after/commitNum ────────────────────
        // Whole-batch fail-fast on any record missing a required key
        let projected = project_records(&records)?;
        tracing::info!("Projected {} records", projected.len());

        // ── Step 3: Resolve the pretrained tokenizer ──────────────────────────
        // The only network access of the run. Truncation to
        // max_seq_len is configured before any encoding happens.
        let tokenizer = pretrained_tokenizer(&cfg.model_id, cfg.max_seq_len)?;

        // ── Step 4: Encode each (before, after) pair ──────────────────────────
        let encoder = FixEncoder::new(tokenizer);
        let samples = encoder.encode_records(&projected)?;

        // ── Step 5: Build the Burn dataset ────────────────────────────────────
        // FixDataset implements Burn's Dataset trait so a
        // DataLoader can consume it for fine-tuning
        let dataset = FixDataset::new(samples);
        tracing::info!("Prepared {} samples", dataset.sample_count());

        Ok(dataset)
    }
}
