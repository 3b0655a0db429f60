// src/main.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use particle_extractor::pipeline::{self, progress::TracingSink, BatchOutcome};
use particle_extractor::sources;
use particle_extractor::storage::StorageManager;
use particle_extractor::utils::{self, AppError};

const SUMMARY_WORKBOOK: &str = "extraction_summary.xlsx";

/// Command Line Interface for the particle measurement extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract cumulative particle counts from PDF reports in a directory
    Pdf {
        /// Directory containing the .pdf report files
        #[arg(short, long, default_value = "INPUT")]
        input_dir: PathBuf,

        /// Output directory for the summary workbook (defaults to the input directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Extract ESD category values from delimited CSV exports in a directory
    Csv {
        /// Directory containing the .csv export files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output directory for the summary workbook (defaults to the input directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    match args.command {
        // The document pipeline is driven through a page collaborator; no
        // PDF geometry backend ships with this build yet. See
        // `pipeline::run_document_batch` for wiring one in.
        Command::Pdf { .. } => Err(AppError::Config(
            "no document backend is configured for PDF input in this build".to_string(),
        )),
        Command::Csv {
            input_dir,
            output_dir,
        } => run_delimited(input_dir, output_dir),
    }
}

fn run_delimited(input_dir: PathBuf, output_dir: Option<PathBuf>) -> Result<(), AppError> {
    // 1. Find all CSV files
    let paths = sources::find_source_files(&input_dir, "csv")?;
    if paths.is_empty() {
        return Err(AppError::Config(format!(
            "no .csv files found in {}",
            input_dir.display()
        )));
    }
    tracing::info!("Found {} CSV file(s) in {}", paths.len(), input_dir.display());

    // 2. Process each file; failures are recorded and never abort the batch
    let mut sink = TracingSink;
    let outcome = pipeline::run_delimited_batch(&paths, &mut sink);

    tracing::info!(
        "Processing finished. Success: {}, Failures: {}",
        outcome.succeeded(),
        outcome.failures.len()
    );

    // 3. Persist the summary, unless nothing succeeded
    write_outcome(&outcome, output_dir.unwrap_or(input_dir))
}

fn write_outcome(outcome: &BatchOutcome, output_dir: PathBuf) -> Result<(), AppError> {
    if outcome.summary.is_empty() {
        tracing::warn!("No sources produced usable data; no workbook written");
        return Err(AppError::Processing(format!(
            "failed to extract data from all {} source(s)",
            outcome.failures.len()
        )));
    }

    let storage = StorageManager::new(output_dir)?;
    let path = storage.save_summary(&outcome.summary, SUMMARY_WORKBOOK)?;
    storage.save_run_metadata(outcome, SUMMARY_WORKBOOK)?;
    tracing::info!("Summary workbook written to {}", path.display());

    Ok(())
}
