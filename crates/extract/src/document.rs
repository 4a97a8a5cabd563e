//! Futures PDF reading via the extracted text layer.
//!
//! Loads the document with lopdf and extracts text page by page, in
//! document order. No layout analysis: only line text reaches the
//! aggregator. Any read or parse failure degrades to an empty record set
//! with an `Unreadable` status.

use crate::page::PageAggregator;
use lopdf::Document;
use recon_core::{Error, ExtractConfig, Result, Sourced, TokenRecord};
use std::path::Path;
use tracing::{debug, warn};

/// Parser for one vendor-exported futures PDF.
pub struct FuturesDocumentParser {
    aggregator: PageAggregator,
}

impl FuturesDocumentParser {
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            aggregator: PageAggregator::new(config),
        }
    }

    /// Parse the document into token records.
    ///
    /// Never fails hard: an unreadable file yields an empty record set
    /// with the reason in the status, logged as a warning.
    pub fn parse(&self, path: &Path) -> Sourced<Vec<TokenRecord>> {
        match self.try_parse(path) {
            Ok(records) => {
                debug!(path = %path.display(), records = records.len(), "futures document parsed");
                Sourced::parsed(records)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "futures document unreadable");
                Sourced::failed(err.to_string())
            }
        }
    }

    fn try_parse(&self, path: &Path) -> Result<Vec<TokenRecord>> {
        let doc = Document::load(path).map_err(|e| Error::pdf(e.to_string()))?;

        let mut pages = Vec::new();
        for (page_number, _) in doc.get_pages() {
            // A page whose text layer cannot be read contributes an
            // empty page, not a document-level failure.
            let text = doc.extract_text(&[page_number]).unwrap_or_default();
            pages.push(page_lines(&text));
        }

        Ok(self.aggregator.parse_pages(&pages))
    }
}

/// Split extracted page text into trimmed, non-empty lines.
fn page_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
