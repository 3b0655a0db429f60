// src/extractors/columns.rs
//! Resolves which header cells carry the particle-size and cumulative-count
//! series. Header text varies between report generators (line breaks inside
//! cells, unit spellings), so matching runs in tiers: exact unit-bearing
//! headers, then loose token matches, then the fixed column layout of the
//! standard report.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::Row;

// --- Tier 1: exact headers. The size phrase is matched case-sensitively,
// exactly as the counters print it.
static SIZE_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Particle Size").expect("Failed to compile SIZE_PHRASE_RE"));
static MICRON_UNIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"µm|um").expect("Failed to compile MICRON_UNIT_RE"));
static PER_ML_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)/ml").expect("Failed to compile PER_ML_RE"));

// --- Tier 2: loose tokens.
static PARTICLE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)particle").expect("Failed to compile PARTICLE_TOKEN_RE"));
static SIZE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)size").expect("Failed to compile SIZE_TOKEN_RE"));
static CUMULATIVE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)cumulative").expect("Failed to compile CUMULATIVE_TOKEN_RE"));
static COUNTS_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)counts").expect("Failed to compile COUNTS_TOKEN_RE"));

// --- Tier 3: the standard report layout is
// `Run No. | Particle Size(µm) | Cumulative Count | Differential Count |
//  Cumulative Counts/mL | Differential Counts/mL`.
pub const SIZE_FALLBACK_INDEX: usize = 1;
pub const COUNT_FALLBACK_INDEX: usize = 4;
const FALLBACK_MIN_COLUMNS: usize = 5;

/// Which column indices carry each semantic role. Extraction proceeds only
/// when both roles are bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnBinding {
    pub size: Option<usize>,
    pub count: Option<usize>,
}

impl ColumnBinding {
    pub fn is_complete(&self) -> bool {
        self.size.is_some() && self.count.is_some()
    }
}

/// Resolves both roles from a header row. Tiers are tried in order per role;
/// a role bound by an earlier tier is never rebound by a later one.
pub fn resolve(header: &Row) -> ColumnBinding {
    let mut binding = ColumnBinding::default();

    // Tier 1. No early exit within the tier: on the (pathological) chance of
    // duplicate exact headers, the rightmost wins.
    for (idx, cell) in header.iter().enumerate() {
        if SIZE_PHRASE_RE.is_match(cell) && MICRON_UNIT_RE.is_match(cell) {
            binding.size = Some(idx);
        }
        let normalized = normalize_breaks(cell);
        if CUMULATIVE_TOKEN_RE.is_match(&normalized)
            && COUNTS_TOKEN_RE.is_match(&normalized)
            && PER_ML_RE.is_match(&normalized)
        {
            binding.count = Some(idx);
        }
    }

    // Tier 2: loose token matching for any role still unbound.
    if binding.size.is_none() {
        binding.size = header.iter().position(|cell| {
            PARTICLE_TOKEN_RE.is_match(cell) && SIZE_TOKEN_RE.is_match(cell)
        });
    }
    if binding.count.is_none() {
        binding.count = header.iter().position(|cell| {
            let normalized = normalize_breaks(cell);
            CUMULATIVE_TOKEN_RE.is_match(&normalized) && COUNTS_TOKEN_RE.is_match(&normalized)
        });
    }

    // Tier 3: positional fallback, only valid for the known wide layout.
    if header.len() >= FALLBACK_MIN_COLUMNS {
        if binding.size.is_none() {
            tracing::debug!("Size header not recognized, falling back to column {SIZE_FALLBACK_INDEX}");
            binding.size = Some(SIZE_FALLBACK_INDEX);
        }
        if binding.count.is_none() {
            tracing::debug!("Count header not recognized, falling back to column {COUNT_FALLBACK_INDEX}");
            binding.count = Some(COUNT_FALLBACK_INDEX);
        }
    }

    binding
}

/// Header cells frequently wrap; line breaks count as spaces for matching.
fn normalize_breaks(cell: &str) -> String {
    cell.replace('\n', " ").replace('\r', " ")
}
