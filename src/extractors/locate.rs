// src/extractors/locate.rs
//! Locates the measurement table on a page. Table-extraction geometry is
//! unreliable on heterogeneous reports, so every page is probed with a
//! cascade of detector configurations and each resulting table is accepted
//! or rejected on its content, not on the strategy that produced it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sources::document::{BoundaryStrategy, Page, TableStrategy};
use crate::table::Table;

/// Detector configurations tried in order against each page. Results from an
/// earlier strategy do not suppress later ones.
pub static STRATEGY_CASCADE: Lazy<Vec<TableStrategy>> = Lazy::new(|| {
    vec![
        TableStrategy::with_tolerances(BoundaryStrategy::Lines, 5.0),
        TableStrategy::uniform(BoundaryStrategy::Text),
        TableStrategy::uniform(BoundaryStrategy::Explicit),
        TableStrategy::with_tolerances(BoundaryStrategy::LinesStrict, 3.0),
    ]
});

// Every qualifying table must mention all four of these somewhere in its
// flattened cell text.
static KEYWORD_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)particle",
        r"(?i)size",
        r"(?i)cumulative",
        r"(?i)counts",
    ]
    .iter()
    .map(|pat| Regex::new(pat).expect("Failed to compile keyword pattern"))
    .collect()
});

/// Runs the strategy cascade against one page and returns every candidate
/// table, in cascade order, that has at least two rows and passes the keyword
/// gate. The caller takes the first candidate it can fully bind and extract.
pub fn locate(page: &dyn Page, strategies: &[TableStrategy]) -> Vec<Table> {
    let mut candidates = Vec::new();
    for (idx, strategy) in strategies.iter().enumerate() {
        let tables = page.extract_tables(strategy);
        if tables.is_empty() {
            continue;
        }
        tracing::debug!("Strategy {} produced {} table(s)", idx + 1, tables.len());

        for table in tables {
            // A header alone carries no measurement series.
            if table.len() < 2 {
                continue;
            }
            if passes_keyword_gate(&table) {
                tracing::debug!(
                    "Accepted candidate table with {} rows (strategy {})",
                    table.len(),
                    idx + 1
                );
                candidates.push(table);
            }
        }
    }
    candidates
}

fn passes_keyword_gate(table: &Table) -> bool {
    let flattened = table
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join(" ");
    KEYWORD_RES.iter().all(|re| re.is_match(&flattened))
}
