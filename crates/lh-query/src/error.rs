//! Error types for request values.

use thiserror::Error;

/// A request value that does not map onto a known filter value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Media type token outside the allow-list.
    #[error("unknown media type: {0:?}")]
    UnknownMediaType(String),

    /// Claim type with no indexed equivalent.
    #[error("unknown claim type: {0:?}")]
    UnknownClaimType(String),
}
