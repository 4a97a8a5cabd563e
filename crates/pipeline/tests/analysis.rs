//! End-to-end pipeline tests over on-disk fixtures.

use recon_core::{ExtractConfig, ProgressEvent, ProgressSink, SourceStatus, Stage};
use recon_extract::PageAggregator;
use recon_pipeline::{build_report, parse_futures_document, parse_spot_table, AnalysisRequest};
use recon_report::render_html;
use std::path::PathBuf;
use std::sync::Mutex;

const SPOT_HTML: &str = r#"
    <html><body>
    <table>
      <tr><th>Rank</th><th>Sym.</th><th>Price</th></tr>
      <tr><td>1</td><td>btc-usd</td><td>64,000</td></tr>
      <tr><td>2</td><td>sol-usd</td><td>140</td></tr>
    </table>
    </body></html>
"#;

/// Sink that records every event, for assertions.
#[derive(Default)]
struct MemorySink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl ProgressSink for MemorySink {
    fn emit(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("recon-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn spot_table_parses_from_disk() {
    let path = write_fixture("spot-parse.html", SPOT_HTML);
    let spot = parse_spot_table(&path);
    std::fs::remove_file(&path).ok();

    assert_eq!(spot.status, SourceStatus::Parsed);
    assert_eq!(spot.data.columns, vec!["rank", "ticker", "price"]);
    assert_eq!(spot.data.rows.len(), 2);
    assert_eq!(spot.data.ticker_of(&spot.data.rows[0]), Some("BTCUSD"));
}

#[test]
fn missing_futures_pdf_fails_soft() {
    let futures = parse_futures_document(std::path::Path::new("/nonexistent/futures.pdf"));
    assert!(futures.data.is_empty());
    assert!(futures.is_unreadable());
}

#[test]
fn synthetic_pages_join_with_spot_table() {
    // Futures records built from page text, as the PDF reader would
    // produce them.
    let aggregator = PageAggregator::new(ExtractConfig::default());
    let page: Vec<String> = [
        "Mkt Cap Vol 24h OI Funding VTMR",
        "Bitcoin",
        "BTC-USD",
        "$1.2B $500M +0.5% -0.01% 0.87",
        "Ethereum",
        "ETH-USD",
        "$400B $20B - - 1.12",
    ]
    .iter()
    .map(|l| l.to_string())
    .collect();
    let futures = aggregator.parse_pages(&[page]);
    assert_eq!(futures.len(), 2);

    let path = write_fixture("spot-join.html", SPOT_HTML);
    let spot = parse_spot_table(&path);
    std::fs::remove_file(&path).ok();

    // Spot has BTCUSD and SOLUSD; futures has BTCUSD and ETHUSD.
    let report = build_report(&futures, &spot.data, "user-42").unwrap();
    assert_eq!(report.row_count(), 1);
    assert_eq!(report.rows[0][0], "BTCUSD");

    let html = render_html(&report);
    assert!(html.contains("Analysis Report for user-42"));
    assert!(html.contains("Cheat Sheet"));
}

#[test]
fn runner_emits_tagged_events_and_skips_on_unreadable_input() {
    let spot_path = write_fixture("spot-runner.html", SPOT_HTML);
    let sink = MemorySink::default();

    let report = recon_pipeline::run_analysis(
        &AnalysisRequest {
            request_id: "req-7",
            futures_path: std::path::Path::new("/nonexistent/futures.pdf"),
            spot_path: &spot_path,
            label: "user-42",
        },
        &sink,
    );
    std::fs::remove_file(&spot_path).ok();

    assert!(report.is_none());

    let events = sink.events.lock().unwrap();
    let stages: Vec<Stage> = events.iter().map(|e| e.stage).collect();
    assert_eq!(
        stages,
        vec![Stage::FuturesParsed, Stage::SpotLoaded, Stage::ReportSkipped]
    );
    assert!(events.iter().all(|e| e.request_id == "req-7"));
    assert!(events[0].detail.starts_with("unreadable:"));
    assert_eq!(events[1].detail, "2 records");
}
