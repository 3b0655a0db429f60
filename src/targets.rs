// src/targets.rs
//! The fixed measurement points that define the summary table's value columns.
//! Shared read-only by the extractors and the aggregator.

/// Size thresholds (µm) reported by the counters we support.
pub const SIZE_THRESHOLDS: [f64; 5] = [2.0, 5.0, 10.0, 25.0, 50.0];

/// Absolute tolerance when matching an extracted size against a threshold at
/// aggregation time. Strict: a difference of exactly 0.01 does not match.
pub const SIZE_MATCH_TOLERANCE: f64 = 0.01;

/// The 12 equivalent-spherical-diameter categories of the delimited-export
/// layout, in the order they appear in the source rows. The spelling of the
/// last label (space before the `+`) is part of the fixed layout.
pub const ESD_CATEGORIES: [&str; 12] = [
    "ESD 1-2 um",
    "ESD 2-5 um",
    "ESD 5-10 um",
    "ESD 10-25 um",
    "ESD 25-50 um",
    "ESD 50 um+",
    "ESD 1-2 um SO",
    "ESD 2-5 um SO",
    "ESD 5-10 um SO",
    "ESD 10-25 um SO",
    "ESD 25-50 um SO",
    "ESD 50 um +SO",
];

/// Summary column label for a size threshold, e.g. `≥2 μm`.
pub fn threshold_label(threshold: f64) -> String {
    format!("≥{threshold} μm")
}
