//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request (connection refused, DNS, reset...).
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl FetchError {
    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::RequestError(_) | FetchError::Timeout)
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to a user.
    ///
    /// HTTP failures surface the server's body text when it has any.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::HttpError { message, .. } if !message.trim().is_empty() => {
                message.trim().to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = FetchError::HttpError {
            status: 409,
            message: "  insufficient stock\n".to_string(),
        };
        assert_eq!(err.user_message(), "insufficient stock");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_user_message_blank_body_falls_back_to_display() {
        let err = FetchError::HttpError {
            status: 500,
            message: "   ".to_string(),
        };
        assert!(err.user_message().starts_with("HTTP 500"));
    }

    #[test]
    fn test_transport_classification() {
        assert!(FetchError::Timeout.is_transport());
        assert!(FetchError::RequestError("refused".into()).is_transport());
        assert!(!FetchError::ParseError("eof".into()).is_transport());
        assert_eq!(FetchError::Timeout.status(), None);
    }
}
