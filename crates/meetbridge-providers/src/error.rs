//! Error types for provider operations.

use thiserror::Error;

/// An error that occurred while talking to the calendar provider.
///
/// Every variant is terminal for the request that hit it; there is no
/// retry path in this backend.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never completed: connection failure, timeout, DNS.
    #[error("network error: {0}")]
    Network(String),

    /// The provider rejected the credentials or the authorization code.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider answered with a non-success status.
    #[error("provider error ({status}): {body}")]
    Provider {
        /// The HTTP status code returned.
        status: u16,
        /// The response body, as returned.
        body: String,
    },

    /// The provider answered 2xx but the body did not parse.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Missing or malformed provider configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Wraps a reqwest transport error, distinguishing timeouts and
    /// connection failures in the message.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Network("request timeout".to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else {
            Self::Network(format!("request failed: {err}"))
        }
    }
}

/// A specialized Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
