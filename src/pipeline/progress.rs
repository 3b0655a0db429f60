// src/pipeline/progress.rs
//! Structured progress reporting for batch runs. The orchestrator emits
//! events through this trait instead of printing, so frontends decide how to
//! surface them.

use crate::utils::error::ExtractError;

pub trait ProgressSink {
    /// A source is about to be processed.
    fn source_started(&mut self, _name: &str) {}

    /// A candidate table passed the keyword gate but was rejected later.
    fn table_rejected(&mut self, _name: &str, _reason: &str) {}

    /// A source yielded a usable measurement series.
    fn source_succeeded(&mut self, _name: &str, _records: usize) {}

    /// A source produced no usable data.
    fn source_failed(&mut self, _name: &str, _reason: &ExtractError) {}
}

/// Forwards events to the tracing subscriber. Default sink for CLI runs.
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn source_started(&mut self, name: &str) {
        tracing::info!("Processing source: {name}");
    }

    fn table_rejected(&mut self, name: &str, reason: &str) {
        tracing::debug!("{name}: candidate table rejected: {reason}");
    }

    fn source_succeeded(&mut self, name: &str, records: usize) {
        tracing::info!("{name}: extracted {records} record(s)");
    }

    fn source_failed(&mut self, name: &str, reason: &ExtractError) {
        tracing::warn!("{name}: extraction failed: {reason}");
    }
}

/// A sink that swallows every event.
pub struct NullSink;

impl ProgressSink for NullSink {}
