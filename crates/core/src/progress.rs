//! Per-invocation progress events.
//!
//! The core never touches process-wide output. Each analysis call is
//! handed a sink and a caller-supplied request identifier; every event it
//! emits is tagged with that identifier, so a calling layer can
//! demultiplex concurrent runs without inspecting thread names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage a progress event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Futures PDF has been read (possibly unreadable, possibly empty).
    FuturesParsed,
    /// Spot HTML table has been loaded.
    SpotLoaded,
    /// The merged report was built.
    ReportBuilt,
    /// No report: one side was empty or the join had no overlap.
    ReportSkipped,
}

/// One structured progress event for one analysis invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Caller-supplied identifier for the invocation.
    pub request_id: String,
    pub stage: Stage,
    /// Human-readable detail (counts, reasons).
    pub detail: String,
    pub at: DateTime<Utc>,
}

impl ProgressEvent {
    pub fn new(request_id: impl Into<String>, stage: Stage, detail: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            stage,
            detail: detail.into(),
            at: Utc::now(),
        }
    }
}

/// Receiver for progress events.
pub trait ProgressSink {
    fn emit(&self, event: ProgressEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _event: ProgressEvent) {}
}
