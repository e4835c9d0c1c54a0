//! Buffered HTTP response.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response with its body fully read.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers, names lower-cased.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    /// Read a `reqwest` response to completion.
    pub(crate) async fn read(resp: reqwest::Response) -> Result<Self, FetchError> {
        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = resp.bytes().await?.to_vec();
        Ok(Self::new(status, headers, body))
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error message is the body text, lossily decoded. It may be empty.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::HttpError {
                status: self.status,
                message: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    // === Status ===

    #[test]
    fn test_is_success_range() {
        assert!(response(200, b"").is_success());
        assert!(response(201, b"").is_success());
        assert!(!response(199, b"").is_success());
        assert!(!response(304, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_error_for_status_carries_body_text() {
        let err = response(422, b"quantity must be positive")
            .error_for_status()
            .unwrap_err();
        match err {
            FetchError::HttpError { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "quantity must be positive");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_for_status_passes_success_through() {
        let resp = response(200, b"ok").error_for_status().unwrap();
        assert_eq!(resp.text().unwrap(), "ok");
    }

    // === Body ===

    #[test]
    fn test_json_body() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Count {
            count: u64,
        }

        let resp = response(200, br#"{"count": 4}"#);
        assert_eq!(resp.json::<Count>().unwrap(), Count { count: 4 });
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let resp = response(200, b"<html>oops</html>");
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, FetchError::ParseError(_)));
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        assert!(response(200, &[0xff, 0xfe]).text().is_err());
    }

    // === Headers ===

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let headers = HashMap::from([("Content-Type".to_string(), "application/json".to_string())]);
        let resp = Response::new(200, headers, Vec::new());
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }
}
