//! Error types for the review notifier.
//!
//! [`ReviewError`] covers every failure kind of a poll cycle plus startup configuration.
//! Only [`ReviewError::Config`] is fatal; the loop recovers from everything else.

use thiserror::Error;

/// Top-level error (configuration, API transport, response shape, formatting, delivery).
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Config error: {0}")]
    Config(String),

    /// Non-200 response (`status` set) or a request that never produced a response.
    #[error("HTTP error: {message}")]
    Http {
        status: Option<u16>,
        message: String,
    },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl ReviewError {
    /// Error for an HTTP response whose status code is not 200.
    pub fn unexpected_status(status: u16) -> Self {
        ReviewError::Http {
            status: Some(status),
            message: format!("unexpected status code {}", status),
        }
    }

    /// Error for a request that failed before a status code was received.
    pub fn transport(message: impl Into<String>) -> Self {
        ReviewError::Http {
            status: None,
            message: message.into(),
        }
    }

    /// True only for startup configuration errors, which terminate the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReviewError::Config(_))
    }
}

/// Result type for core operations; uses [`ReviewError`].
pub type Result<T> = std::result::Result<T, ReviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_keeps_code() {
        let err = ReviewError::unexpected_status(500);
        match &err {
            ReviewError::Http { status, .. } => assert_eq!(*status, Some(500)),
            other => panic!("unexpected variant: {:?}", other),
        }
        assert_eq!(err.to_string(), "HTTP error: unexpected status code 500");
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = ReviewError::transport("connection refused");
        assert!(matches!(err, ReviewError::Http { status: None, .. }));
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn test_only_config_is_fatal() {
        assert!(ReviewError::Config("PRACTICUM_TOKEN not set".into()).is_fatal());
        assert!(!ReviewError::Schema("no homeworks".into()).is_fatal());
        assert!(!ReviewError::Delivery("chat not found".into()).is_fatal());
        assert!(!ReviewError::unexpected_status(404).is_fatal());
    }
}
