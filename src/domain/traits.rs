// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// similar to interfaces in Java or abstract classes in Python.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - JsonDatasetLoader implements RecordSource
//   - A future JsonlLoader could also implement RecordSource
//   - The application layer only sees RecordSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::error::PrepError;
use crate::domain::raw_record::RawRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can load the raw bug-fix corpus.
///
/// Implementations:
///   - JsonDatasetLoader → loads a single JSON array file
///   - (future) JsonlLoader → loads newline-delimited JSON
pub trait RecordSource {
    /// Load every record from this source, in source order.
    /// Returns the full dataset or a typed PrepError —
    /// never a silently empty dataset.
    fn load_all(&self) -> Result<Vec<RawRecord>, PrepError>;
}
