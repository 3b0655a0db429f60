// src/pipeline/mod.rs
//! The batch orchestrator. Sources are processed strictly sequentially; a
//! failure on one source is recorded and never aborts the batch. Per-source
//! results flow into the aggregator only for sources that yielded data.

pub mod progress;

use std::path::{Path, PathBuf};

use crate::extractors::{columns, fixed, locate, window, MeasurementRecord, STRATEGY_CASCADE};
use crate::sources::delimited;
use crate::sources::document::DocumentSource;
use crate::summary::{aggregate_by_position, aggregate_by_threshold, SummaryTable};
use crate::utils::error::ExtractError;
use self::progress::ProgressSink;

/// Outcome of one batch run: the summary for the sources that yielded data,
/// and the reasons the others did not.
#[derive(Debug)]
pub struct BatchOutcome {
    pub summary: SummaryTable,
    pub failures: Vec<(String, ExtractError)>,
}

impl BatchOutcome {
    pub fn succeeded(&self) -> usize {
        self.summary.rows.len()
    }
}

/// Runs the document pipeline over already-opened sources, in order.
pub fn run_document_batch<D: DocumentSource>(
    sources: &[(String, D)],
    sink: &mut dyn ProgressSink,
) -> BatchOutcome {
    let mut extracted = Vec::new();
    let mut failures = Vec::new();

    for (name, document) in sources {
        sink.source_started(name);
        match extract_from_document(name, document, sink) {
            Ok(records) => {
                sink.source_succeeded(name, records.len());
                extracted.push((name.clone(), records));
            }
            Err(err) => {
                sink.source_failed(name, &err);
                failures.push((name.clone(), err));
            }
        }
    }

    BatchOutcome {
        summary: aggregate_by_threshold(&extracted),
        failures,
    }
}

/// Pulls one measurement series out of a document: pages in order, candidate
/// tables in cascade order, first fully-extractable candidate wins.
pub fn extract_from_document<D: DocumentSource>(
    name: &str,
    document: &D,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<MeasurementRecord>, ExtractError> {
    let mut saw_candidate = false;
    let mut saw_binding = false;

    for page in document.pages() {
        for table in locate::locate(page, &STRATEGY_CASCADE) {
            saw_candidate = true;
            let Some(header) = table.header() else {
                continue; // locate guarantees >=2 rows; defensive only for empty tables
            };

            let binding = columns::resolve(header);
            if !binding.is_complete() {
                sink.table_rejected(name, "size/count columns could not be bound");
                continue;
            }
            saw_binding = true;

            let records = window::extract(&table, &binding);
            if !records.is_empty() {
                return Ok(records);
            }
            sink.table_rejected(name, "no numeric records under any row rule");
        }

        // Pages that mention the data without a machine-readable table are
        // worth a trace for operators diagnosing a report format.
        if let Some(text) = page.extract_text() {
            if text.to_lowercase().contains("particle") {
                tracing::debug!("{name}: page text mentions particle data but no table qualified");
            }
        }
    }

    Err(if saw_binding {
        ExtractError::EmptyExtraction
    } else if saw_candidate {
        ExtractError::UnresolvedColumns
    } else {
        ExtractError::NoQualifyingTable
    })
}

/// Runs the delimited pipeline over a list of file paths, in order.
pub fn run_delimited_batch(paths: &[PathBuf], sink: &mut dyn ProgressSink) -> BatchOutcome {
    let mut extracted = Vec::new();
    let mut failures = Vec::new();

    for path in paths {
        let name = source_name(path);
        sink.source_started(&name);
        match extract_from_grid(path) {
            Ok(pairs) => {
                sink.source_succeeded(&name, pairs.len());
                extracted.push((name, pairs));
            }
            Err(err) => {
                sink.source_failed(&name, &err);
                failures.push((name, err));
            }
        }
    }

    BatchOutcome {
        summary: aggregate_by_position(&extracted),
        failures,
    }
}

fn extract_from_grid(path: &Path) -> Result<Vec<(String, String)>, ExtractError> {
    let grid = delimited::read_grid(path)?;
    let pairs = fixed::extract(&grid)?;
    if pairs.is_empty() {
        return Err(ExtractError::EmptyExtraction);
    }
    Ok(pairs)
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::document::testing::{FakeDocument, FakePage};
    use crate::table::{Row, Table};
    use std::fs;
    use super::progress::NullSink;

    const STANDARD_HEADER: [&str; 6] = [
        "Run No.",
        "Particle Size(µm)",
        "Cumulative Count",
        "Differential Count",
        "Cumulative\nCounts/mL",
        "Differential\nCounts/mL",
    ];

    /// The end-to-end scenario: a 25-row table whose data row 19 carries
    /// size 2 / count 500.
    fn report_document() -> FakeDocument {
        let mut rows = vec![Row::from(STANDARD_HEADER.to_vec())];
        for i in 1..=24 {
            rows.push(Row::from(vec![
                i.to_string(),
                format!("{}", i + 100), // sizes off the target grid
                String::new(),
                String::new(),
                format!("{}", i * 100),
                String::new(),
            ]));
        }
        // Data row 19 (report row 20).
        rows[20] = Row::from(vec![
            "20".to_string(),
            "2".to_string(),
            String::new(),
            String::new(),
            "500".to_string(),
            String::new(),
        ]);
        FakeDocument::single_page(FakePage::with_tables(vec![Table(rows)]))
    }

    #[test]
    fn end_to_end_scenario_maps_row_twenty_into_the_two_micron_column() {
        let sources = vec![("A.pdf".to_string(), report_document())];
        let outcome = run_document_batch(&sources, &mut NullSink);

        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.succeeded(), 1);
        let row = &outcome.summary.rows[0];
        assert_eq!(row.sample, "A");
        assert_eq!(row.sequence, 1);
        assert_eq!(row.values, vec![500.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn failed_sources_are_excluded_and_survivors_renumbered() {
        let empty = FakeDocument::default();
        let sources = vec![
            ("first.pdf".to_string(), report_document()),
            ("broken.pdf".to_string(), empty),
            ("third.pdf".to_string(), report_document()),
        ];
        let outcome = run_document_batch(&sources, &mut NullSink);

        assert_eq!(outcome.succeeded(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].0, "broken.pdf");
        let sequences: Vec<u32> = outcome.summary.rows.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert_eq!(outcome.summary.rows[1].sample, "third");
    }

    #[test]
    fn source_without_candidates_reports_no_qualifying_table() {
        let doc = FakeDocument::single_page(FakePage::with_tables(vec![Table::from(vec![
            vec!["unrelated", "header"],
            vec!["1", "2"],
        ])]));
        let err = extract_from_document("x.pdf", &doc, &mut NullSink).unwrap_err();
        assert!(matches!(err, ExtractError::NoQualifyingTable));
    }

    #[test]
    fn candidate_with_unbindable_columns_reports_unresolved() {
        // Four columns: the keyword gate passes via the data row, but no
        // header matches and the positional fallback needs five columns.
        let doc = FakeDocument::single_page(FakePage::with_tables(vec![Table::from(vec![
            vec!["a", "b", "c", "d"],
            vec!["particle size", "cumulative counts", "", ""],
        ])]));
        let err = extract_from_document("x.pdf", &doc, &mut NullSink).unwrap_err();
        assert!(matches!(err, ExtractError::UnresolvedColumns));
    }

    #[test]
    fn bound_table_with_no_numeric_rows_reports_empty_extraction() {
        let doc = FakeDocument::single_page(FakePage::with_tables(vec![Table::from(vec![
            vec!["Particle Size(µm)", "Cumulative Counts/mL"],
            vec!["pending", "pending"],
        ])]));
        let err = extract_from_document("x.pdf", &doc, &mut NullSink).unwrap_err();
        assert!(matches!(err, ExtractError::EmptyExtraction));
    }

    #[test]
    fn later_pages_are_tried_when_earlier_ones_have_nothing() {
        let blank = FakePage::default();
        let mut doc = report_document();
        doc.0.insert(0, blank);
        let records = extract_from_document("x.pdf", &doc, &mut NullSink).unwrap();
        assert!(!records.is_empty());
    }

    #[test]
    fn delimited_batch_isolates_per_file_failures() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good_summary.csv");
        let mut body = String::new();
        for i in 0..45 {
            body.push_str(&format!("label-{i},a,b,c,{}\n", i * 2));
        }
        fs::write(&good, body).unwrap();

        let short = dir.path().join("short.csv");
        fs::write(&short, "only,one,row\n").unwrap();

        let outcome = run_delimited_batch(&[good, short], &mut NullSink);
        assert_eq!(outcome.succeeded(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.failures[0].1,
            ExtractError::InsufficientRows { found: 1, .. }
        ));

        let row = &outcome.summary.rows[0];
        assert_eq!(row.sample, "good");
        // Rows 30..=41, value column 4, mapped positionally.
        assert_eq!(row.values[0], 60.0);
        assert_eq!(row.values[11], 82.0);
    }
}
