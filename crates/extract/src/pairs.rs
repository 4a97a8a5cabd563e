//! Token-pair resolution from adjacent label lines.
//!
//! The vendor PDF lays each entry out as a label block: either a display
//! ticker followed by the canonical ticker line, or a prose name followed
//! by the ticker line. A single greedy forward pass pairs them up; lines
//! with no valid ticker successor are dropped.

use recon_core::{normalize_ticker, ExtractConfig, TokenPair};

/// Validate a candidate string as a strict ticker.
///
/// Qualifies only if the raw length is within bounds and the normalized
/// form lands inside the configured length window. Returns the normalized
/// ticker on success.
pub fn strict_ticker(text: &str, config: &ExtractConfig) -> Option<String> {
    if text.chars().count() > config.max_raw_ticker_len {
        return None;
    }
    let cleaned = normalize_ticker(text);
    if (config.min_ticker_len..=config.max_ticker_len).contains(&cleaned.len()) {
        Some(cleaned)
    } else {
        None
    }
}

/// Pair adjacent label lines into (name, ticker) records.
///
/// Greedy, non-backtracking: whenever line[i+1] validates as a strict
/// ticker, line[i] becomes the name and both are consumed. This covers
/// both adjacency patterns -- ticker-then-ticker, where the first line
/// doubles as the display name, and name-then-ticker. A line with no
/// valid successor is discarded and the scan advances by one.
pub fn resolve_pairs<S: AsRef<str>>(labels: &[S], config: &ExtractConfig) -> Vec<TokenPair> {
    let mut pairs = Vec::new();
    let mut i = 0;

    while i < labels.len() {
        if let Some(next) = labels.get(i + 1) {
            if let Some(ticker) = strict_ticker(next.as_ref(), config) {
                pairs.push(TokenPair {
                    name: labels[i].as_ref().to_string(),
                    ticker,
                });
                i += 2;
                continue;
            }
        }
        i += 1;
    }

    pairs
}
