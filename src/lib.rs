// src/lib.rs
//! Heuristic extraction of particle-count measurement tables from
//! semi-structured sources.
//!
//! Two pipelines share one summary model:
//!
//! - the **document pipeline** probes each page of a report with a cascade of
//!   table-detection strategies, accepts tables by keyword content, binds the
//!   size/count columns through tiered header matching, and reads the
//!   measurement rows positionally with a value-based fallback;
//! - the **delimited pipeline** reads a fixed row/column rectangle out of CSV
//!   exports and maps it positionally onto the ESD category set.
//!
//! The document-parsing geometry itself is an external collaborator behind
//! the [`sources::document::Page`] trait; this crate only consumes candidate
//! tables and page text.

pub mod extractors;
pub mod pipeline;
pub mod sources;
pub mod storage;
pub mod summary;
pub mod table;
pub mod targets;
pub mod utils;
