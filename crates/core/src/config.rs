//! Configuration structures for the reconciliation pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// PDF extraction configuration.
    pub extract: ExtractConfig,
    /// Report merging configuration.
    pub report: ReportConfig,
}

/// Configuration for the PDF-side extraction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// A line whose lowercased form contains any of these is dropped
    /// before classification (page markers, column headers, branding).
    pub noise_keywords: Vec<String>,
    /// Minimum normalized ticker length (inclusive).
    pub min_ticker_len: usize,
    /// Maximum normalized ticker length (inclusive).
    pub max_ticker_len: usize,
    /// Maximum raw candidate length before normalization.
    pub max_raw_ticker_len: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            noise_keywords: [
                "page", "coinalyze", "contract", "filter", "column", "mkt cap", "vol 24h",
            ]
            .iter()
            .map(|k| k.to_string())
            .collect(),
            min_ticker_len: 2,
            max_ticker_len: 12,
            max_raw_ticker_len: 15,
        }
    }
}

/// Configuration for the spot/futures report merge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Suffix appended to spot columns that collide with futures columns.
    pub spot_suffix: String,
    /// Suffix appended to futures columns that collide with spot columns.
    pub futures_suffix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            spot_suffix: "_spot".to_string(),
            futures_suffix: "_fut".to_string(),
        }
    }
}
