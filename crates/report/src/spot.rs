//! Spot-table loading from an HTML export.
//!
//! Extracts the first `<table>` from the document, lowercases column
//! names, infers the ticker column when it is not literally named
//! `ticker`, and normalizes every ticker value. Any parse failure yields
//! an empty table with an `Unreadable` status.

use recon_core::{normalize_ticker, Error, Result, SpotRow, SpotTable, Sourced};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use tracing::{debug, warn};

/// Load the spot table from a file. Fails soft.
pub fn load_spot_table(path: &Path) -> Sourced<SpotTable> {
    match try_load(path) {
        Ok(table) => {
            debug!(path = %path.display(), rows = table.rows.len(), "spot table loaded");
            Sourced::parsed(table)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "spot table unreadable");
            Sourced::failed(err.to_string())
        }
    }
}

fn try_load(path: &Path) -> Result<SpotTable> {
    let html = std::fs::read_to_string(path)?;
    parse_spot_html(&html)
}

/// Parse an HTML document containing at least one table.
///
/// A document with no table is a parse failure, not an empty dataset.
pub fn parse_spot_html(html: &str) -> Result<SpotTable> {
    let document = Html::parse_document(html);

    let sel_table = selector("table")?;
    let sel_tr = selector("tr")?;
    let sel_th = selector("th")?;
    let sel_td = selector("td")?;

    let table = document
        .select(&sel_table)
        .next()
        .ok_or_else(|| Error::html("no table found in document"))?;

    // Header row: first <tr> with <th> cells; fall back to the first
    // row's <td> cells for exports that skip <th> entirely.
    let mut header_from_td = false;
    let mut columns: Vec<String> = Vec::new();
    for tr in table.select(&sel_tr) {
        let cells: Vec<String> = tr.select(&sel_th).map(cell_text).collect();
        if !cells.is_empty() {
            columns = cells;
            break;
        }
    }
    if columns.is_empty() {
        if let Some(first_tr) = table.select(&sel_tr).next() {
            columns = first_tr.select(&sel_td).map(cell_text).collect();
            header_from_td = true;
        }
    }
    if columns.is_empty() {
        return Err(Error::html("table has no header row"));
    }

    let mut columns: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();
    rename_ticker_column(&mut columns);
    let ticker_idx = columns.iter().position(|c| c == "ticker");

    let mut rows = Vec::new();
    for (row_idx, tr) in table.select(&sel_tr).enumerate() {
        if header_from_td && row_idx == 0 {
            continue;
        }
        let mut cells: Vec<String> = tr.select(&sel_td).map(cell_text).collect();
        if cells.is_empty() {
            // Header-only or spacer row.
            continue;
        }
        cells.resize(columns.len(), String::new());
        if let Some(idx) = ticker_idx {
            cells[idx] = normalize_ticker(&cells[idx]);
        }
        rows.push(SpotRow { cells });
    }

    Ok(SpotTable { columns, rows })
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::html(format!("selector `{css}`: {e}")))
}

/// If no column is literally `ticker`, rename the first one whose name
/// contains `tick` or `sym`.
fn rename_ticker_column(columns: &mut [String]) {
    if columns.iter().any(|c| c == "ticker") {
        return;
    }
    if let Some(col) = columns
        .iter_mut()
        .find(|c| c.contains("tick") || c.contains("sym"))
    {
        *col = "ticker".to_string();
    }
}

/// Collapse whitespace and trim a cell's text content.
fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
