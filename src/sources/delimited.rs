// src/sources/delimited.rs
//! Loader for delimited-text sources: a rectangular grid of string cells with
//! no header assumed.

use std::path::Path;

use csv::ReaderBuilder;

use crate::table::{Row, Table};
use crate::utils::error::ExtractError;

/// Reads the whole file into a grid. Rows may have uneven widths; missing
/// cells read back as absent, not as empty strings.
pub fn read_grid(path: &Path) -> Result<Table, ExtractError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| unreadable(path, &err))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| unreadable(path, &err))?;
        rows.push(Row(record.iter().map(str::to_string).collect()));
    }
    Ok(Table(rows))
}

fn unreadable(path: &Path, err: &dyn std::fmt::Display) -> ExtractError {
    ExtractError::SourceUnreadable(format!("{}: {}", path.display(), err))
}
