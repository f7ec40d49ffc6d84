//! Search error types.

use thiserror::Error;

/// Errors surfaced by the search client and the feed.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SearchError {
    #[error("invalid search URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("network error during search: {message}")]
    Network { message: String },

    #[error("search response had no body")]
    NoData,

    #[error("failed to decode search response: {message}")]
    Decode { message: String },

    #[error("no access key available for the search API")]
    MissingAccessKey,

    #[error("secure storage error: {0}")]
    Secret(#[from] super::SecretError),
}

impl SearchError {
    /// Creates invalid URL error.
    #[must_use]
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns whether a later call with the same input may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::NoData)
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
