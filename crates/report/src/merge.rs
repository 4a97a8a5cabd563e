//! Inner join of futures token records and spot rows on ticker.

use chrono::Utc;
use recon_core::{Report, ReportConfig, SpotTable, TokenRecord};
use tracing::debug;

/// Futures-side column names, in output order. `ticker` is the join key
/// and appears once, first.
const FUTURES_COLUMNS: [&str; 6] = [
    "name",
    "market_cap",
    "volume",
    "vtmr",
    "funding",
    "open_interest",
];

/// Merges the two sources into a combined report.
pub struct ReportMerger {
    config: ReportConfig,
}

impl ReportMerger {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Inner join on normalized ticker, spot-side row order.
    ///
    /// Returns `None` when either input is empty, when the spot table has
    /// no ticker column, or when the join has no overlap -- "nothing to
    /// render" rather than an empty report.
    pub fn merge(
        &self,
        futures: &[TokenRecord],
        spot: &SpotTable,
        label: &str,
    ) -> Option<Report> {
        if futures.is_empty() || spot.is_empty() {
            return None;
        }
        let ticker_idx = spot.ticker_index()?;

        let columns = self.joined_columns(spot, ticker_idx);

        let mut rows = Vec::new();
        for row in &spot.rows {
            let Some(ticker) = row.cells.get(ticker_idx) else {
                continue;
            };
            // First futures match per spot row; duplicates beyond the
            // first are ignored.
            let Some(record) = futures.iter().find(|r| &r.ticker == ticker) else {
                continue;
            };

            let mut cells = Vec::with_capacity(columns.len());
            cells.push(ticker.clone());
            for (i, cell) in row.cells.iter().enumerate() {
                if i != ticker_idx {
                    cells.push(cell.clone());
                }
            }
            cells.extend([
                record.name.clone(),
                record.market_cap.clone(),
                record.volume.clone(),
                record.vtmr.to_string(),
                record.funding.clone(),
                record.open_interest.clone(),
            ]);
            rows.push(cells);
        }

        if rows.is_empty() {
            debug!("join produced no overlapping tickers");
            return None;
        }

        Some(Report {
            label: label.to_string(),
            columns,
            rows,
            generated_at: Utc::now(),
        })
    }

    /// Joined column names: `ticker`, spot columns, futures columns.
    /// Names colliding across sources carry the configured suffixes.
    fn joined_columns(&self, spot: &SpotTable, ticker_idx: usize) -> Vec<String> {
        let spot_cols: Vec<&String> = spot
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != ticker_idx)
            .map(|(_, c)| c)
            .collect();

        let mut columns = vec!["ticker".to_string()];
        for col in &spot_cols {
            if FUTURES_COLUMNS.contains(&col.as_str()) {
                columns.push(format!("{}{}", col, self.config.spot_suffix));
            } else {
                columns.push((*col).clone());
            }
        }
        for col in FUTURES_COLUMNS {
            if spot_cols.iter().any(|c| c.as_str() == col) {
                columns.push(format!("{}{}", col, self.config.futures_suffix));
            } else {
                columns.push(col.to_string());
            }
        }
        columns
    }
}
