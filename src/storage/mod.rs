// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use serde::Serialize;

use crate::pipeline::BatchOutcome;
use crate::summary::SummaryTable;
use crate::utils::error::StorageError;

const SUMMARY_SHEET: &str = "Summary";

pub struct StorageManager {
    base_dir: PathBuf,
}

#[derive(Serialize)]
struct RunReport<'a> {
    workbook: &'a str,
    samples: usize,
    failures: Vec<FailureEntry>,
    extraction_timestamp: String,
}

#[derive(Serialize)]
struct FailureEntry {
    source: String,
    reason: String,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Writes the summary workbook: a single sheet, one header row, one row
    /// per successfully-extracted sample.
    pub fn save_summary(
        &self,
        summary: &SummaryTable,
        file_name: &str,
    ) -> Result<PathBuf, StorageError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SUMMARY_SHEET)?;

        for (col, header) in summary.headers().iter().enumerate() {
            sheet.write_string(0, col as u16, header)?;
        }
        for (idx, row) in summary.rows.iter().enumerate() {
            let sheet_row = idx as u32 + 1;
            sheet.write_number(sheet_row, 0, row.sequence as f64)?;
            sheet.write_string(sheet_row, 1, &row.sample)?;
            for (col, value) in row.values.iter().enumerate() {
                sheet.write_number(sheet_row, col as u16 + 2, *value)?;
            }
        }

        let file_path = self.base_dir.join(file_name);
        workbook.save(&file_path)?;

        tracing::info!("Saved summary workbook to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the batch run in JSON format: counts, per-source
    /// failure reasons, and a timestamp.
    pub fn save_run_metadata(
        &self,
        outcome: &BatchOutcome,
        workbook_name: &str,
    ) -> Result<PathBuf, StorageError> {
        let report = RunReport {
            workbook: workbook_name,
            samples: outcome.succeeded(),
            failures: outcome
                .failures
                .iter()
                .map(|(source, reason)| FailureEntry {
                    source: source.clone(),
                    reason: reason.to_string(),
                })
                .collect(),
            extraction_timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let report_str = serde_json::to_string_pretty(&report)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let file_path = self.base_dir.join("run_metadata.json");
        fs::write(&file_path, report_str)?;

        tracing::info!("Saved run metadata to {}", file_path.display());

        Ok(file_path)
    }
}
