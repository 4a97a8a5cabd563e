//! Page aggregation: classify, resolve, correlate.
//!
//! Runs the line classifier and token-pair resolver over each page and
//! hands both sequences to the record matcher. Pages are independent; a
//! page yielding zero financial lines or zero resolvable pairs simply
//! contributes zero records.

use crate::classifier::LineClassifier;
use crate::matcher::{PositionalMatcher, RecordMatcher};
use crate::pairs::resolve_pairs;
use recon_core::{normalize_ticker, ExtractConfig, TokenRecord};
use tracing::debug;

/// Builds token records from pages of extracted text lines.
pub struct PageAggregator {
    classifier: LineClassifier,
    config: ExtractConfig,
    matcher: Box<dyn RecordMatcher + Send + Sync>,
}

impl PageAggregator {
    /// Create an aggregator with the default positional matcher.
    pub fn new(config: ExtractConfig) -> Self {
        Self::with_matcher(config, Box::new(PositionalMatcher))
    }

    /// Create an aggregator with a custom matching strategy.
    pub fn with_matcher(
        config: ExtractConfig,
        matcher: Box<dyn RecordMatcher + Send + Sync>,
    ) -> Self {
        Self {
            classifier: LineClassifier::new(&config),
            config,
            matcher,
        }
    }

    /// Parse one page of trimmed, non-empty lines into token records.
    pub fn parse_page<S: AsRef<str>>(&self, lines: &[S]) -> Vec<TokenRecord> {
        let classified = self.classifier.classify_page(lines);
        let pairs = resolve_pairs(&classified.labels, &self.config);

        debug!(
            pairs = pairs.len(),
            financials = classified.financials.len(),
            noise = classified.noise_dropped,
            "page classified"
        );

        self.matcher.match_records(pairs, classified.financials)
    }

    /// Parse all pages in document order and concatenate the results.
    ///
    /// Every ticker is re-normalized at the boundary; normalization is
    /// idempotent so this only matters for custom matchers.
    pub fn parse_pages(&self, pages: &[Vec<String>]) -> Vec<TokenRecord> {
        let mut records: Vec<TokenRecord> = pages
            .iter()
            .flat_map(|lines| self.parse_page(lines))
            .collect();

        for record in &mut records {
            record.ticker = normalize_ticker(&record.ticker);
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn aggregator() -> PageAggregator {
        PageAggregator::new(ExtractConfig::default())
    }

    fn page(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_single_page_pairs_and_financials() {
        let lines = page(&[
            "Mkt Cap Vol 24h OI Funding VTMR",
            "Bitcoin",
            "BTC",
            "$1.2B $500M +0.5% +0.01% 0.87",
            "Ethereum",
            "ETH",
            "$400B $20B - -0.02% 1.12",
        ]);
        let records = aggregator().parse_page(&lines);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker, "BTC");
        assert_eq!(records[0].name, "Bitcoin");
        assert_eq!(records[0].market_cap, "1.2B");
        assert_eq!(records[0].vtmr, OrderedFloat(0.87));
        assert_eq!(records[1].ticker, "ETH");
        assert_eq!(records[1].funding, "-0.02%");
        assert_eq!(records[1].open_interest, "-");
    }

    #[test]
    fn test_truncation_to_financial_count() {
        // Three resolvable pairs, two financial lines: the first two
        // pairs survive, in order.
        let lines = page(&[
            "Bitcoin", "BTC", "Ethereum", "ETH", "Solana", "SOL",
            "1.2M 500K - - 0.87",
            "3.4M 900K - - 0.91",
        ]);
        let records = aggregator().parse_page(&lines);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker, "BTC");
        assert_eq!(records[1].ticker, "ETH");
    }

    #[test]
    fn test_empty_page_contributes_nothing() {
        assert!(aggregator().parse_page(&page(&[])).is_empty());
        assert!(aggregator().parse_page(&page(&["Bitcoin", "BTC"])).is_empty());
        assert!(aggregator()
            .parse_page(&page(&["1.2M 500K - - 0.87"]))
            .is_empty());
    }

    #[test]
    fn test_multi_page_concatenation_in_order() {
        let pages = vec![
            page(&["Bitcoin", "BTC", "1.2M 500K - - 0.87"]),
            page(&["Ethereum", "ETH", "3.4M 900K - - 0.91"]),
        ];
        let records = aggregator().parse_pages(&pages);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker, "BTC");
        assert_eq!(records[1].ticker, "ETH");
    }
}
