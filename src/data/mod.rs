// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw JSON file
// all the way to model-ready tensor batches.
//
// The pipeline flows in this order:
//
//   datasets/sstubsLarge.json
//       │
//       ▼
//   JsonDatasetLoader → reads the file, parses RawRecords
//       │
//       ▼
//   project_records   → keeps before/after, renames
//       │                commitSHA1 → commitNum, drops the rest
//       ▼
//   FixEncoder        → tokenizes each (before, after) pair
//       │
//       ▼
//   FixDataset        → implements Burn's Dataset trait
//       │
//       ▼
//   FixBatcher        → stacks samples into padded tensor batches
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Loads the JSON array dataset from disk
pub mod loader;

/// Projects RawRecords down to the before/after/commit view
pub mod projector;

/// Tokenizes projected records into model-input samples
pub mod encoder;

/// Implements Burn's Dataset trait for tokenized samples
pub mod dataset;

/// Implements Burn's Batcher trait to create padded tensor batches
pub mod batcher;
