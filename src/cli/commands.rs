// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `inspect`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::prepare_use_case::PrepareConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tokenize the bug-fix dataset into model inputs
    Prepare(PrepareArgs),

    /// Load and project the dataset without tokenizing
    Inspect(InspectArgs),
}

/// All arguments for the `prepare` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Path to the JSON array of bug-fix records
    #[arg(long, default_value = "datasets/sstubsLarge.json")]
    pub dataset_path: String,

    /// Model identifier on the HuggingFace hub — used to fetch
    /// the matching tokenizer (no model weights are loaded)
    #[arg(long, default_value = "microsoft/CodeGPT-small-java-adaptedGPT2")]
    pub model_id: String,

    /// Maximum number of tokens per encoded (before, after) pair;
    /// longer pairs are truncated by the tokenizer
    #[arg(long, default_value_t = 512)]
    pub max_seq_len: usize,
}

/// Convert CLI PrepareArgs into the application-layer config.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            dataset_path: a.dataset_path,
            model_id:     a.model_id,
            max_seq_len:  a.max_seq_len,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the JSON array of bug-fix records
    #[arg(long, default_value = "datasets/sstubsLarge.json")]
    pub dataset_path: String,
}
