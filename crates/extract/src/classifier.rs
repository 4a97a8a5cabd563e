//! Line classification for extracted PDF page text.
//!
//! Separates "financial data" lines (matching the composite numeric
//! pattern) from "label" lines (candidate name/ticker text), filtering out
//! known noise such as page markers and column headers. There are no
//! glyph positions to work with, only line text, so classification rests
//! entirely on token shape.

use recon_core::{ExtractConfig, FinancialLine};
use regex::Regex;
use tracing::debug;

/// Composite pattern for one financial line, in order: a currency/number
/// token (market cap), a second currency/number token (volume), up to two
/// optional percentage-or-placeholder tokens (open interest, funding),
/// and a trailing bare decimal (VTMR).
///
/// The optional tokens accept a signed percentage, a dash/en-dash/em-dash
/// glyph, or the literal `N/A`.
const FINANCIAL_PATTERN: &str = concat!(
    r"(\$?[+-]?[\d,\.]+[kKmMbB]?)\s+",
    r"(\$?[+-]?[\d,\.]+[kKmMbB]?)\s+",
    r"(?:([+-]?[\d\.,]+%?|[-–—]|N/A)\s+)?",
    r"(?:([+-]?[\d\.,]+%?|[-–—]|N/A)\s+)?",
    r"(\d*\.?\d+)",
);

/// Classification output for one page, both sequences in original line
/// order.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedLines {
    /// Financial 5-tuples.
    pub financials: Vec<FinancialLine>,
    /// Candidate name/ticker lines.
    pub labels: Vec<String>,
    /// Lines dropped by the noise-keyword filter.
    pub noise_dropped: usize,
    /// Lines failing both classifications.
    pub discarded: usize,
}

/// Classifier for lines of extracted PDF text.
pub struct LineClassifier {
    pattern: Regex,
    noise_keywords: Vec<String>,
}

impl LineClassifier {
    /// Create a classifier from extraction configuration.
    pub fn new(config: &ExtractConfig) -> Self {
        Self {
            pattern: Regex::new(FINANCIAL_PATTERN).expect("financial pattern is valid"),
            noise_keywords: config.noise_keywords.clone(),
        }
    }

    /// Classify the trimmed, non-empty lines of one page.
    pub fn classify_page<S: AsRef<str>>(&self, lines: &[S]) -> ClassifiedLines {
        let mut out = ClassifiedLines::default();

        for line in lines {
            let line = line.as_ref();
            let lower = line.to_lowercase();
            if self.noise_keywords.iter().any(|k| lower.contains(k.as_str())) {
                out.noise_dropped += 1;
                continue;
            }

            if let Some(financial) = self.extract_financial(line) {
                out.financials.push(financial);
                continue;
            }

            if is_label_shaped(line) {
                out.labels.push(line.to_string());
            } else {
                debug!(line, "discarded unclassifiable line");
                out.discarded += 1;
            }
        }

        out
    }

    /// Parse a line into a financial tuple, if it matches the composite
    /// pattern and its trailing token parses as a float.
    fn extract_financial(&self, line: &str) -> Option<FinancialLine> {
        let caps = self.pattern.captures(line)?;

        // A trailing token that fails to parse reclassifies the whole
        // line as non-financial.
        let vtmr: f64 = caps.get(5)?.as_str().parse().ok()?;

        Some(FinancialLine {
            market_cap: strip_separators(caps.get(1)?.as_str()),
            volume: strip_separators(caps.get(2)?.as_str()),
            open_interest: caps.get(3).map(|m| m.as_str().to_string()),
            funding: caps.get(4).map(|m| m.as_str().to_string()),
            vtmr,
        })
    }
}

/// A label line is anything not purely digits with more than one character.
fn is_label_shaped(line: &str) -> bool {
    !line.chars().all(|c| c.is_ascii_digit()) && line.chars().count() > 1
}

/// Strip currency symbols and thousands separators; unit suffixes stay.
fn strip_separators(token: &str) -> String {
    token.replace(['$', ','], "")
}
