//! HTTP request builder.

use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// The HTTP method of this request.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The target URL, without query parameters.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query string parameter. Values are percent-encoded on send.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Set the request body as a string.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.headers
            .entry("Content-Type".to_string())
            .or_insert_with(|| "text/plain".to_string());
        self.body = Some(text.into_bytes());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Set the Content-Type header.
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header("Content-Type", content_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Payload {
            quantity: u32,
        }

        let req = RequestBuilder::new(Method::Post, "/api/orders")
            .json(&Payload { quantity: 2 })
            .unwrap();
        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(req.body.as_deref(), Some(br#"{"quantity":2}"#.as_slice()));
    }

    #[test]
    fn test_text_keeps_explicit_content_type() {
        let req = RequestBuilder::new(Method::Post, "/x")
            .content_type("text/csv")
            .text("a,b");
        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("text/csv")
        );
    }

    #[test]
    fn test_query_params_are_kept_in_order() {
        let req = RequestBuilder::new(Method::Get, "/api/products/lowstock")
            .query("threshold", 10)
            .query("page", "2");
        assert_eq!(
            req.query,
            vec![
                ("threshold".to_string(), "10".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
        assert_eq!(req.url(), "/api/products/lowstock");
        assert_eq!(req.method().as_str(), "GET");
    }
}
