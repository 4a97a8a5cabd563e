//! Core data types for the futures/spot reconciliation system.

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// VTMR score with ordering support.
///
/// The trailing decimal on a financial line; its presence is what anchors
/// the line as financial data in the first place.
pub type Vtmr = OrderedFloat<f64>;

/// Placeholder used when an optional percentage field was absent.
pub const ABSENT_FIELD: &str = "-";

/// Canonicalize a raw symbol to uppercase with every character outside
/// `[A-Z0-9]` removed. Idempotent; an empty result is valid output.
pub fn normalize_ticker(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// One parsed futures-market entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Normalized symbol, uppercase alphanumeric, length 2-12.
    pub ticker: String,
    /// Free-text label as extracted, not normalized.
    pub name: String,
    /// Market cap as a numeric string; `$` and `,` stripped, unit suffix kept.
    pub market_cap: String,
    /// 24h volume, same cleanup as `market_cap`.
    pub volume: String,
    /// Trailing decimal score; mandatory for a line to count as financial.
    pub vtmr: Vtmr,
    /// Funding rate field: signed percentage, dash glyph, or "N/A".
    pub funding: String,
    /// Open-interest field, same shapes as `funding`.
    pub open_interest: String,
}

/// The ordered 5-tuple recovered from one financial line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialLine {
    pub market_cap: String,
    pub volume: String,
    /// Third group of the composite pattern, when present.
    pub open_interest: Option<String>,
    /// Fourth group of the composite pattern, when present.
    pub funding: Option<String>,
    pub vtmr: f64,
}

/// A resolved (name, ticker) pair from adjacent label lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Display label, as extracted.
    pub name: String,
    /// Normalized ticker taken from the following line.
    pub ticker: String,
}

/// One row of the spot-table export. Cells align with `SpotTable::columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotRow {
    pub cells: Vec<String>,
}

/// Normalized tabular form of the HTML-exported spot table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotTable {
    /// Lowercased column names.
    pub columns: Vec<String>,
    pub rows: Vec<SpotRow>,
}

impl SpotTable {
    /// Index of the `ticker` column, if one exists.
    pub fn ticker_index(&self) -> Option<usize> {
        self.columns.iter().position(|c| c == "ticker")
    }

    /// Ticker value of a row, when the table has a ticker column.
    ///
    /// The returned slice borrows from `row`, not from the table.
    pub fn ticker_of<'a>(&self, row: &'a SpotRow) -> Option<&'a str> {
        let idx = self.ticker_index()?;
        row.cells.get(idx).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Inner join of token records and spot rows on ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Caller-supplied label, shown in the rendered heading.
    pub label: String,
    /// Joined column names; collisions carry a source suffix.
    pub columns: Vec<String>,
    /// Joined rows, spot-side order.
    pub rows: Vec<Vec<String>>,
    /// When the report was built.
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ticker_strips_and_uppercases() {
        assert_eq!(normalize_ticker("btc-usd"), "BTCUSD");
        assert_eq!(normalize_ticker(" eth "), "ETH");
        assert_eq!(normalize_ticker("$$$"), "");
        assert_eq!(normalize_ticker("1000pepe"), "1000PEPE");
    }

    #[test]
    fn test_normalize_ticker_idempotent() {
        for raw in ["btc", "BTC/USDT", "Sol.", "", "§µ¶"] {
            let once = normalize_ticker(raw);
            assert_eq!(normalize_ticker(&once), once);
        }
    }

    #[test]
    fn test_spot_table_ticker_lookup() {
        let table = SpotTable {
            columns: vec!["rank".into(), "ticker".into(), "price".into()],
            rows: vec![SpotRow {
                cells: vec!["1".into(), "BTC".into(), "64000".into()],
            }],
        };
        assert_eq!(table.ticker_index(), Some(1));
        assert_eq!(table.ticker_of(&table.rows[0]), Some("BTC"));
    }

    #[test]
    fn test_ticker_of_outlives_the_table() {
        let row = SpotRow {
            cells: vec!["BTC".into()],
        };
        let ticker;
        {
            let table = SpotTable {
                columns: vec!["ticker".into()],
                rows: vec![],
            };
            ticker = table.ticker_of(&row);
        }
        assert_eq!(ticker, Some("BTC"));
    }

    #[test]
    fn test_spot_table_without_ticker_column() {
        let table = SpotTable {
            columns: vec!["rank".into(), "price".into()],
            rows: vec![],
        };
        assert_eq!(table.ticker_index(), None);
        assert!(table.is_empty());
    }
}
