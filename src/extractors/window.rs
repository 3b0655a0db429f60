// src/extractors/window.rs
//! Selects the rows that carry the actual measurement series. The standard
//! report puts them at a fixed offset, but real documents drift (extra header
//! rows, truncated tables), so an empty positional read falls back to
//! filtering the whole table by content.

use crate::extractors::columns::ColumnBinding;
use crate::table::{coerce_numeric, Row, Table};
use crate::targets::SIZE_THRESHOLDS;

/// One (size, cumulative count) pair pulled from a bound table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRecord {
    pub size: f64,
    pub value: f64,
}

// Data-row window of the standard report layout (header excluded).
const WINDOW_START: usize = 19;
const WINDOW_END: usize = 24; // exclusive
const FULL_WINDOW_MIN_ROWS: usize = 25;
const PARTIAL_WINDOW_MIN_ROWS: usize = 20;

/// Extracts measurement records from a table whose columns are bound.
/// Returns an empty vector when both the positional window and the
/// value-based fallback come up empty.
pub fn extract(table: &Table, binding: &ColumnBinding) -> Vec<MeasurementRecord> {
    let (Some(size_col), Some(count_col)) = (binding.size, binding.count) else {
        return Vec::new();
    };

    let data = table.data_rows();
    let window = if data.len() >= FULL_WINDOW_MIN_ROWS {
        &data[WINDOW_START..WINDOW_END]
    } else if data.len() >= PARTIAL_WINDOW_MIN_ROWS {
        // Short table: stop before the trailing row, which is usually a
        // totals line in truncated reports.
        &data[WINDOW_START..WINDOW_END.min(data.len() - 1)]
    } else {
        data
    };

    let records: Vec<MeasurementRecord> = window
        .iter()
        .filter_map(|row| record_from(row, size_col, count_col))
        .collect();
    if !records.is_empty() {
        return records;
    }

    // Position failed; recover by content. Only rows whose size exactly
    // equals a target threshold qualify here. The looser 0.01 tolerance is
    // applied at aggregation time, not at this stage.
    tracing::debug!("Primary row window empty, filtering full table for target sizes");
    data.iter()
        .filter_map(|row| record_from(row, size_col, count_col))
        .filter(|record| SIZE_THRESHOLDS.iter().any(|t| record.size == *t))
        .collect()
}

/// A row yields a record only when both bound cells coerce to numbers.
fn record_from(row: &Row, size_col: usize, count_col: usize) -> Option<MeasurementRecord> {
    let size = coerce_numeric(row.get(size_col)?)?;
    let value = coerce_numeric(row.get(count_col)?)?;
    Some(MeasurementRecord { size, value })
}
