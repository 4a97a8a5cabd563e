//! Futures-PDF extraction for the reconciliation system.
//!
//! This crate handles:
//! - Line classification (financial lines vs. label lines vs. noise)
//! - Financial 5-tuple extraction
//! - Token-pair resolution from adjacent label lines
//! - Page aggregation into token records
//! - Reading the PDF text layer via lopdf

pub mod classifier;
pub mod document;
pub mod matcher;
pub mod page;
pub mod pairs;

pub use classifier::{ClassifiedLines, LineClassifier};
pub use document::FuturesDocumentParser;
pub use matcher::{PositionalMatcher, RecordMatcher};
pub use page::PageAggregator;
pub use pairs::{resolve_pairs, strict_ticker};
