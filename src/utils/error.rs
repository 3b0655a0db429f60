// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application

/// Reasons a single source failed to yield measurement data. None of these
/// abort a batch: the orchestrator records the failure and moves on.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Source could not be read: {0}")]
    SourceUnreadable(String),

    #[error("No table passed the keyword filter on any page")]
    NoQualifyingTable,

    #[error("Could not bind size/count columns in any candidate table")]
    UnresolvedColumns,

    #[error("Delimited source has {found} rows, at least {required} required")]
    InsufficientRows { found: usize, required: usize },

    #[error("All extraction rules produced zero valid records")]
    EmptyExtraction,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
