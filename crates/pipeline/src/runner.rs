//! Analysis runner with per-invocation progress emission.

use recon_core::{
    Config, ProgressEvent, ProgressSink, Report, SourceStatus, Sourced, Stage,
};
use recon_extract::FuturesDocumentParser;
use recon_report::{load_spot_table, ReportMerger};
use std::path::Path;
use tracing::debug;

/// One analysis invocation: two input paths plus the caller's request
/// identifier, which tags every progress event.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub request_id: &'a str,
    pub futures_path: &'a Path,
    pub spot_path: &'a Path,
    /// Label shown in the rendered report heading.
    pub label: &'a str,
}

/// Runs analysis requests. Holds configuration only; no state survives
/// between runs.
pub struct AnalysisRunner {
    parser: FuturesDocumentParser,
    merger: ReportMerger,
}

impl AnalysisRunner {
    pub fn new(config: Config) -> Self {
        Self {
            parser: FuturesDocumentParser::new(config.extract),
            merger: ReportMerger::new(config.report),
        }
    }

    /// Run one analysis, emitting progress events to the caller's sink.
    ///
    /// Returns `None` when there is nothing to render: either input was
    /// empty or unreadable, or the join had no overlap.
    pub fn run(&self, request: &AnalysisRequest, sink: &dyn ProgressSink) -> Option<Report> {
        let futures = self.parser.parse(request.futures_path);
        sink.emit(ProgressEvent::new(
            request.request_id,
            Stage::FuturesParsed,
            source_detail(futures.data.len(), &futures.status),
        ));

        let spot = load_spot_table(request.spot_path);
        sink.emit(ProgressEvent::new(
            request.request_id,
            Stage::SpotLoaded,
            source_detail(spot.data.rows.len(), &spot.status),
        ));

        match self.merger.merge(&futures.data, &spot.data, request.label) {
            Some(report) => {
                debug!(request_id = request.request_id, rows = report.row_count(), "report built");
                sink.emit(ProgressEvent::new(
                    request.request_id,
                    Stage::ReportBuilt,
                    format!("{} rows", report.row_count()),
                ));
                Some(report)
            }
            None => {
                sink.emit(ProgressEvent::new(
                    request.request_id,
                    Stage::ReportSkipped,
                    skip_reason(&futures, &spot),
                ));
                None
            }
        }
    }
}

impl Default for AnalysisRunner {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn source_detail(count: usize, status: &SourceStatus) -> String {
    match status {
        SourceStatus::Parsed => format!("{count} records"),
        SourceStatus::Unreadable(reason) => format!("unreadable: {reason}"),
    }
}

fn skip_reason<A, B>(futures: &Sourced<Vec<A>>, spot: &Sourced<B>) -> String {
    if futures.is_unreadable() || spot.is_unreadable() {
        "an input was unreadable".to_string()
    } else if futures.data.is_empty() {
        "no futures records".to_string()
    } else {
        "empty spot table or no ticker overlap".to_string()
    }
}
