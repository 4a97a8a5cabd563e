//! Synchronous orchestration of one analysis run.
//!
//! The core contract: a caller hands in two file paths (and, for the
//! runner, a request identifier and a progress sink) and receives a
//! merged report or nothing. Stateless between invocations; safe to call
//! concurrently on distinct inputs. No stage panics or propagates an
//! error -- every loader fails soft and reports through its
//! [`recon_core::SourceStatus`].

pub mod runner;

pub use runner::{AnalysisRequest, AnalysisRunner};

use recon_core::{Config, Report, Sourced, SpotTable, TokenRecord};
use recon_extract::FuturesDocumentParser;
use recon_report::ReportMerger;
use std::path::Path;

/// Parse a futures PDF into token records with default configuration.
pub fn parse_futures_document(path: &Path) -> Sourced<Vec<TokenRecord>> {
    FuturesDocumentParser::new(Config::default().extract).parse(path)
}

/// Parse an HTML spot-table export with default configuration.
pub fn parse_spot_table(path: &Path) -> Sourced<SpotTable> {
    recon_report::load_spot_table(path)
}

/// Inner-join futures records and spot rows into a report.
/// `None` when either side is empty or the join has no overlap.
pub fn build_report(futures: &[TokenRecord], spot: &SpotTable, label: &str) -> Option<Report> {
    ReportMerger::new(Config::default().report).merge(futures, spot, label)
}

/// Run a full analysis with default configuration, emitting progress
/// events tagged with the caller's request identifier.
pub fn run_analysis(
    request: &AnalysisRequest,
    sink: &dyn recon_core::ProgressSink,
) -> Option<Report> {
    AnalysisRunner::default().run(request, sink)
}
