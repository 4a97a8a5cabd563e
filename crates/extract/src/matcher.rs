//! Correlation of resolved token pairs with financial tuples.
//!
//! The text layer gives no content-level anchor tying a label block to
//! its numbers, so the default strategy correlates purely by list
//! position within a page. That assumption is a known fragility; the
//! trait keeps it swappable without touching callers.

use recon_core::{FinancialLine, TokenPair, TokenRecord, ABSENT_FIELD};
use ordered_float::OrderedFloat;

/// Strategy for building token records from the two per-page sequences.
pub trait RecordMatcher {
    fn match_records(
        &self,
        pairs: Vec<TokenPair>,
        financials: Vec<FinancialLine>,
    ) -> Vec<TokenRecord>;
}

/// Positional matcher: truncate both sequences to the shorter length and
/// zip in order. Excess pairs or excess financial lines are silently
/// dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalMatcher;

impl RecordMatcher for PositionalMatcher {
    fn match_records(
        &self,
        pairs: Vec<TokenPair>,
        financials: Vec<FinancialLine>,
    ) -> Vec<TokenRecord> {
        pairs
            .into_iter()
            .zip(financials)
            .map(|(pair, fin)| TokenRecord {
                ticker: pair.ticker,
                name: pair.name,
                market_cap: fin.market_cap,
                volume: fin.volume,
                vtmr: OrderedFloat(fin.vtmr),
                funding: fin.funding.unwrap_or_else(|| ABSENT_FIELD.to_string()),
                open_interest: fin
                    .open_interest
                    .unwrap_or_else(|| ABSENT_FIELD.to_string()),
            })
            .collect()
    }
}
