//! Core types and configuration for the futures/spot reconciliation system.
//!
//! This crate provides shared types used across all other crates:
//! - Parsed record types (token records, spot rows, reports)
//! - Ticker normalization
//! - Configuration structures
//! - Common error types
//! - Source status and progress-event models

pub mod config;
pub mod error;
pub mod progress;
pub mod source;
pub mod types;

pub use config::{Config, ExtractConfig, ReportConfig};
pub use error::{Error, Result};
pub use progress::{NullSink, ProgressEvent, ProgressSink, Stage};
pub use source::{SourceStatus, Sourced};
pub use types::*;
