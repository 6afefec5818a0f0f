//! Error types for wire output.

use thiserror::Error;

/// Errors that can occur when preparing Elasticsearch output.
#[derive(Debug, Error)]
pub enum ElasticError {
    /// The configured release-time origin is not an RFC 3339 timestamp.
    #[error("invalid release origin {value:?}: {source}")]
    InvalidOrigin {
        /// The rejected value.
        value: String,
        /// Underlying parse error.
        source: chrono::ParseError,
    },
}
