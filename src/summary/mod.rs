// src/summary/mod.rs
//! Merges per-source extraction results into the one canonical summary table:
//! one row per successfully-extracted source, one value column per target
//! measurement point, defaults of zero.

use crate::extractors::window::MeasurementRecord;
use crate::table::coerce_numeric;
use crate::targets::{threshold_label, ESD_CATEGORIES, SIZE_MATCH_TOLERANCE, SIZE_THRESHOLDS};

pub const SEQUENCE_HEADER: &str = "No.";
pub const SAMPLE_HEADER: &str = "Sample Name";

/// Suffix the delimited exports append to their file stems.
const DELIMITED_SUFFIX: &str = "_summary";

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub sequence: u32,
    pub sample: String,
    /// One value per target column, in canonical column order.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    /// Target column labels, in canonical order.
    pub value_columns: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Full header row: sequence, sample name, then the target columns.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![SEQUENCE_HEADER.to_string(), SAMPLE_HEADER.to_string()];
        headers.extend(self.value_columns.iter().cloned());
        headers
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Aggregates document-pipeline extractions. Each record overwrites the first
/// threshold column within [`SIZE_MATCH_TOLERANCE`] of its size. Only
/// successful sources reach this function, so sequence numbers simply follow
/// the input order, starting at 1.
pub fn aggregate_by_threshold(extracted: &[(String, Vec<MeasurementRecord>)]) -> SummaryTable {
    let value_columns = SIZE_THRESHOLDS.iter().map(|t| threshold_label(*t)).collect();
    let rows = extracted
        .iter()
        .enumerate()
        .map(|(idx, (name, records))| {
            let mut values = vec![0.0; SIZE_THRESHOLDS.len()];
            for record in records {
                for (col, threshold) in SIZE_THRESHOLDS.iter().enumerate() {
                    if (record.size - threshold).abs() < SIZE_MATCH_TOLERANCE {
                        values[col] = record.value;
                        break;
                    }
                }
            }
            SummaryRow {
                sequence: idx as u32 + 1,
                sample: sample_stem(name),
                values,
            }
        })
        .collect();
    SummaryTable {
        value_columns,
        rows,
    }
}

/// Aggregates delimited-pipeline extractions. Pair `i` lands in category
/// column `i` regardless of its label text; the layout is positional. Pairs
/// beyond the 12 categories are ignored, and a value that fails numeric
/// coercion leaves its category at 0.
pub fn aggregate_by_position(extracted: &[(String, Vec<(String, String)>)]) -> SummaryTable {
    let value_columns = ESD_CATEGORIES.iter().map(|s| s.to_string()).collect();
    let rows = extracted
        .iter()
        .enumerate()
        .map(|(idx, (name, pairs))| {
            let mut values = vec![0.0; ESD_CATEGORIES.len()];
            for (col, (_label, raw)) in pairs.iter().take(ESD_CATEGORIES.len()).enumerate() {
                if let Some(value) = coerce_numeric(raw) {
                    values[col] = value;
                }
            }
            SummaryRow {
                sequence: idx as u32 + 1,
                sample: delimited_sample_name(name),
                values,
            }
        })
        .collect();
    SummaryTable {
        value_columns,
        rows,
    }
}

/// Sample name for a source: the file name with its extension stripped.
fn sample_stem(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

/// Delimited exports additionally carry a conventional `_summary` suffix.
fn delimited_sample_name(file_name: &str) -> String {
    let stem = sample_stem(file_name);
    stem.strip_suffix(DELIMITED_SUFFIX).unwrap_or(&stem).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(size: f64, value: f64) -> MeasurementRecord {
        MeasurementRecord { size, value }
    }

    #[test]
    fn tolerance_match_is_strictly_below_one_hundredth() {
        let extracted = vec![(
            "A.pdf".to_string(),
            vec![
                record(2.004, 100.0),   // within tolerance of 2
                record(5.02, 200.0),    // outside
                record(10.02, 300.0),   // outside
                record(25.0099, 400.0), // just inside the boundary
            ],
        )];
        let table = aggregate_by_threshold(&extracted);
        assert_eq!(table.rows[0].values, vec![100.0, 0.0, 0.0, 400.0, 0.0]);
    }

    #[test]
    fn uncovered_targets_default_to_zero_not_absent() {
        let extracted = vec![(
            "B.pdf".to_string(),
            vec![record(2.0, 1.0), record(10.0, 2.0), record(50.0, 3.0)],
        )];
        let table = aggregate_by_threshold(&extracted);
        assert_eq!(table.rows[0].values, vec![1.0, 0.0, 2.0, 0.0, 3.0]);
        assert_eq!(table.rows[0].values.len(), SIZE_THRESHOLDS.len());
    }

    #[test]
    fn first_matching_record_can_be_overwritten_by_a_later_one() {
        // Later records for the same threshold overwrite earlier ones; each
        // record itself stops at its first matching column.
        let extracted = vec![(
            "C.pdf".to_string(),
            vec![record(2.0, 10.0), record(2.001, 20.0)],
        )];
        let table = aggregate_by_threshold(&extracted);
        assert_eq!(table.rows[0].values[0], 20.0);
    }

    #[test]
    fn sample_names_lose_their_extension() {
        let extracted = vec![
            ("Sample One.pdf".to_string(), vec![record(2.0, 1.0)]),
            ("noext".to_string(), vec![record(5.0, 1.0)]),
        ];
        let table = aggregate_by_threshold(&extracted);
        assert_eq!(table.rows[0].sample, "Sample One");
        assert_eq!(table.rows[1].sample, "noext");
        assert_eq!(table.rows[1].sequence, 2);
    }

    #[test]
    fn positional_mapping_ignores_label_text() {
        let pairs: Vec<(String, String)> = (0..12)
            .map(|i| (format!("whatever-{i}"), format!("{}", i * 100)))
            .collect();
        let extracted = vec![("s_summary.csv".to_string(), pairs)];
        let table = aggregate_by_position(&extracted);
        assert_eq!(table.rows[0].sample, "s");
        assert_eq!(table.rows[0].values[0], 0.0);
        assert_eq!(table.rows[0].values[11], 1100.0);
        assert_eq!(table.value_columns[11], "ESD 50 um +SO");
    }

    #[test]
    fn extra_pairs_and_non_numeric_values_leave_defaults() {
        let mut pairs: Vec<(String, String)> = (0..14)
            .map(|i| (format!("p{i}"), "7".to_string()))
            .collect();
        pairs[3].1 = "not-a-number".to_string();
        let extracted = vec![("x.csv".to_string(), pairs)];
        let table = aggregate_by_position(&extracted);
        assert_eq!(table.rows[0].values.len(), 12);
        assert_eq!(table.rows[0].values[3], 0.0);
        assert!(table.rows[0].values.iter().filter(|v| **v == 7.0).count() == 11);
    }

    #[test]
    fn headers_lead_with_sequence_and_sample() {
        let table = aggregate_by_threshold(&[]);
        let headers = table.headers();
        assert_eq!(headers[0], SEQUENCE_HEADER);
        assert_eq!(headers[1], SAMPLE_HEADER);
        assert_eq!(headers[2], "≥2 μm");
        assert!(table.is_empty());
    }
}
