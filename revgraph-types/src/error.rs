use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the revgraph workspace.
///
/// The aggregation engine itself is total; these variants cover the boundary
/// where the calling layer hands in loosely typed selections or rows.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RevGraphError {
    /// Invalid input argument (e.g. an unknown bucket size name).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the supplied data (malformed rows, missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl RevGraphError {
    /// Helper: build an `InvalidArg` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error from any message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Returns true if this error points at caller input rather than data.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidArg(_))
    }
}
