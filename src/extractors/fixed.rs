// src/extractors/fixed.rs
//! The delimited-export variant of row selection. These files follow one
//! fixed layout: the 12 ESD category rows sit at rows 30..=41, with the
//! category label in column 0 and the value in column 4. There is no
//! fallback; a file that is too short fails outright.

use crate::table::Table;
use crate::utils::error::ExtractError;

pub const REQUIRED_ROWS: usize = 42;
const ROW_START: usize = 30;
const LABEL_COLUMN: usize = 0;
const VALUE_COLUMN: usize = 4;

/// Reads the fixed rectangle out of a grid. Rows missing either the label or
/// the value are dropped; surviving pairs keep their original row order.
/// Values stay textual here: coercion happens during aggregation, where a
/// non-numeric value leaves its category at the default.
pub fn extract(grid: &Table) -> Result<Vec<(String, String)>, ExtractError> {
    if grid.len() < REQUIRED_ROWS {
        return Err(ExtractError::InsufficientRows {
            found: grid.len(),
            required: REQUIRED_ROWS,
        });
    }

    let mut pairs = Vec::new();
    for row in &grid[ROW_START..REQUIRED_ROWS] {
        let label = row.get(LABEL_COLUMN).map(|s| s.trim()).unwrap_or("");
        let value = row.get(VALUE_COLUMN).map(|s| s.trim()).unwrap_or("");
        if label.is_empty() || value.is_empty() {
            continue;
        }
        pairs.push((label.to_string(), value.to_string()));
    }
    Ok(pairs)
}
