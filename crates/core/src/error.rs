//! Error types for the futures/spot reconciliation system.
//!
//! Errors here are internal to the loaders: every public entry point
//! degrades to an empty payload plus a [`crate::SourceStatus`] instead of
//! propagating.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the reconciliation system.
#[derive(Error, Debug)]
pub enum Error {
    /// PDF could not be loaded or its text layer read.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// HTML could not be parsed or held no usable table.
    #[error("HTML error: {0}")]
    Html(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a PDF error.
    pub fn pdf(msg: impl Into<String>) -> Self {
        Error::Pdf(msg.into())
    }

    /// Create an HTML error.
    pub fn html(msg: impl Into<String>) -> Self {
        Error::Html(msg.into())
    }
}
