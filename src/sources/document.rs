// src/sources/document.rs
//! Interfaces to the document-parsing collaborator. The geometry and text
//! layout engine behind these traits is external; this crate only consumes
//! the candidate tables and raw text a page can produce.

use crate::table::Table;
use serde::Serialize;

/// How the collaborator should infer cell boundaries along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryStrategy {
    /// Ruled lines drawn on the page.
    Lines,
    /// Ruled lines with stricter matching.
    LinesStrict,
    /// Alignment of the text itself.
    Text,
    /// Explicitly supplied boundaries.
    Explicit,
}

/// One geometric extraction configuration handed to a page. Tolerances are in
/// page units and only meaningful for the line-based strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableStrategy {
    pub vertical: BoundaryStrategy,
    pub horizontal: BoundaryStrategy,
    pub snap_tolerance: Option<f64>,
    pub join_tolerance: Option<f64>,
}

impl TableStrategy {
    pub fn uniform(strategy: BoundaryStrategy) -> Self {
        Self {
            vertical: strategy,
            horizontal: strategy,
            snap_tolerance: None,
            join_tolerance: None,
        }
    }

    pub fn with_tolerances(strategy: BoundaryStrategy, tolerance: f64) -> Self {
        Self {
            vertical: strategy,
            horizontal: strategy,
            snap_tolerance: Some(tolerance),
            join_tolerance: Some(tolerance),
        }
    }
}

/// One page of a document source. Null cells must be stringified to empty
/// text by the implementation.
pub trait Page {
    /// Candidate tables found on this page under the given strategy.
    fn extract_tables(&self, strategy: &TableStrategy) -> Vec<Table>;

    /// Raw page text, if the page has any.
    fn extract_text(&self) -> Option<String>;
}

/// A document source: an ordered sequence of pages.
pub trait DocumentSource {
    fn pages(&self) -> Vec<&dyn Page>;
}
