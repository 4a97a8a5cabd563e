//! Loader results that distinguish "empty input" from "unreadable input".
//!
//! Every loader in the system fails soft: callers always receive a
//! payload, possibly empty. The status tells them (and tests) whether an
//! empty payload means the source genuinely held nothing or could not be
//! read at all.

use serde::{Deserialize, Serialize};

/// Outcome of reading one input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceStatus {
    /// The source was read and parsed; the payload is authoritative.
    Parsed,
    /// The source could not be read or parsed; the payload is empty.
    Unreadable(String),
}

/// A payload together with the status of the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub data: T,
    pub status: SourceStatus,
}

impl<T> Sourced<T> {
    /// Wrap a successfully parsed payload.
    pub fn parsed(data: T) -> Self {
        Self {
            data,
            status: SourceStatus::Parsed,
        }
    }

    /// Wrap an empty payload for a source that could not be read.
    pub fn unreadable(empty: T, reason: impl Into<String>) -> Self {
        Self {
            data: empty,
            status: SourceStatus::Unreadable(reason.into()),
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self.status, SourceStatus::Unreadable(_))
    }
}

impl<T: Default> Sourced<T> {
    /// Shorthand for an unreadable source with a `Default` payload.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::unreadable(T::default(), reason)
    }
}
