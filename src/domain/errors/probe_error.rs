//! Image probe error types.

use thiserror::Error;

/// Failures while probing a URL for its content type.
///
/// None of these are fatal: the rewriter treats every variant as
/// "not an image".
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ProbeError {
    #[error("invalid url: {url}")]
    InvalidUrl { url: String },

    #[error("probe timed out")]
    Timeout,

    #[error("failed to connect: {message}")]
    Connect { message: String },

    #[error("request failed: {message}")]
    Request { message: String },

    #[error("failed to build HTTP client: {message}")]
    Client { message: String },
}

impl ProbeError {
    /// Creates invalid url error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates connect error.
    #[must_use]
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Creates request error.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    /// Creates client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns whether error came from the network rather than the input.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(
            self,
            Self::Timeout | Self::Connect { .. } | Self::Request { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        assert!(ProbeError::Timeout.is_network_error());
        assert!(ProbeError::connect("refused").is_network_error());
        assert!(!ProbeError::invalid_url("nope").is_network_error());
        assert!(!ProbeError::client("tls").is_network_error());
    }

    #[test]
    fn test_display() {
        let err = ProbeError::request("HTTP 500");
        assert_eq!(err.to_string(), "request failed: HTTP 500");
    }
}
