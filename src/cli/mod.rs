// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `prepare` — runs the full load → project → tokenize
//                  pipeline against a pretrained tokenizer
//   2. `inspect` — loads and projects the dataset only
//                  (no tokenizer download, no network)
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, PrepareArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "sstubs-prep",
    version = "0.1.0",
    about = "Prepare the sstubs bug-fix corpus for causal LM fine-tuning."
)]
pub struct Cli {
    /// The subcommand to run (prepare or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => Self::run_prepare(args),
            Commands::Inspect(args) => Self::run_inspect(args),
        }
    }

    /// Handles the `prepare` subcommand.
    /// Converts CLI args into a PrepareConfig and hands off to Layer 2.
    fn run_prepare(args: PrepareArgs) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Starting preparation of: {}", args.dataset_path);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = PrepareUseCase::new(args.into());
        let dataset  = use_case.execute()?;

        println!(
            "Preparation complete: {} tokenized samples ready for fine-tuning.",
            dataset.sample_count()
        );
        Ok(())
    }

    /// Handles the `inspect` subcommand.
    /// Loads and projects the dataset, then prints a summary.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        let use_case = InspectUseCase::new(&args.dataset_path);
        let report   = use_case.execute()?;

        println!("Records: {}", report.record_count);
        if let Some(first) = report.first {
            // Pretty-print the projected shape of the first record
            println!("First record:\n{}", serde_json::to_string_pretty(&first)?);
        }
        Ok(())
    }
}
