//! API error types.

use candy_commerce::CommerceError;
use candy_data::FetchError;
use thiserror::Error;

/// Failure of one storefront API call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport or HTTP failure from the fetch client.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The request was rejected before it was sent.
    #[error("Invalid order: {0}")]
    Order(#[from] CommerceError),
}

/// Coarse failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No response: connection failure, timeout, bad URL.
    Network,
    /// The server answered with a non-2xx status.
    Http,
    /// The body could not be decoded or encoded.
    Parse,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Fetch(FetchError::HttpError { .. }) => ErrorKind::Http,
            ApiError::Fetch(FetchError::ParseError(_)) | ApiError::Fetch(FetchError::JsonError(_)) => {
                ErrorKind::Parse
            }
            ApiError::Fetch(_) => ErrorKind::Network,
            ApiError::Order(CommerceError::Serialization(_)) => ErrorKind::Parse,
            // Rejected locally; nothing reached the server.
            ApiError::Order(_) => ErrorKind::Network,
        }
    }

    /// Message suitable for an end-user notice.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Fetch(e) => e.user_message(),
            ApiError::Order(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let http = ApiError::from(FetchError::HttpError {
            status: 500,
            message: String::new(),
        });
        assert_eq!(http.kind(), ErrorKind::Http);
        assert_eq!(ApiError::from(FetchError::Timeout).kind(), ErrorKind::Network);
        assert_eq!(
            ApiError::from(FetchError::ParseError("eof".into())).kind(),
            ErrorKind::Parse
        );
        assert_eq!(ApiError::from(CommerceError::EmptyOrder).kind(), ErrorKind::Network);
    }

    #[test]
    fn test_user_message_uses_server_text() {
        let err = ApiError::from(FetchError::HttpError {
            status: 400,
            message: "Produto sem estoque".into(),
        });
        assert_eq!(err.user_message(), "Produto sem estoque");
    }
}
