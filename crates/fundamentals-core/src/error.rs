//! Error types for fundamentals operations.
//!
//! This module defines [`DataError`] which covers the hard failures that can occur
//! when fetching, parsing, or caching company facts. Missing line items are not
//! errors; they surface as `None` fields in the extracted snapshot.

use thiserror::Error;

/// Errors that can occur during fundamentals operations.
#[derive(Error, Debug)]
pub enum DataError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// Rate limit exceeded by a provider.
    #[error("Rate limited by {provider}: retry after {retry_after:?}")]
    RateLimited {
        /// The provider that rate limited the request.
        provider: String,
        /// Suggested time to wait before retrying.
        retry_after: Option<std::time::Duration>,
    },

    /// The requested ticker was not found in the company directory.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Error parsing data from a provider.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The company facts document does not have the expected structure.
    #[error("Malformed company facts document: {0}")]
    MalformedDocument(String),

    /// Error interacting with the cache.
    #[error("Cache error: {0}")]
    Cache(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using [`DataError`].
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DataError::MalformedDocument("missing us-gaap facts".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed company facts document: missing us-gaap facts"
        );

        let err = DataError::RateLimited {
            provider: "SEC EDGAR".to_string(),
            retry_after: None,
        };
        assert_eq!(err.to_string(), "Rate limited by SEC EDGAR: retry after None");
    }
}
