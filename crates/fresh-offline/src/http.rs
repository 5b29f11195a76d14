//! Request and response types the worker intercepts.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// An outbound request the worker may intercept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Create a request with the given method.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Get a header value, case-insensitively.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the requester accepts an HTML response.
    pub fn accepts_html(&self) -> bool {
        self.header_value("Accept")
            .map(|v| v.contains("text/html"))
            .unwrap_or(false)
    }

    /// The cache identity of this request: method plus exact URL.
    pub fn identity(&self) -> String {
        format!("{} {}", self.method.as_str(), self.url)
    }
}

/// Where a response came from, relative to the page's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    /// Same-origin response. The only kind the worker caches.
    Basic,
    /// Cross-origin response with CORS headers.
    Cors,
    /// Cross-origin response without readable body or status.
    Opaque,
}

/// A response flowing back through the worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
    /// Origin classification.
    pub kind: ResponseKind,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            kind: ResponseKind::Basic,
        }
    }

    /// Create a same-origin 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, HashMap::new(), body.into())
    }

    /// Set the origin classification.
    pub fn with_kind(mut self, kind: ResponseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add a header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the worker may store a copy: a normal, same-origin,
    /// status-200 response.
    pub fn is_cacheable(&self) -> bool {
        self.status == 200 && self.kind == ResponseKind::Basic
    }

    /// Get the response body as text.
    pub fn text(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }

    /// Get a header value, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_identity() {
        let req = Request::get("https://fruit.example/css/style.css");
        assert_eq!(req.identity(), "GET https://fruit.example/css/style.css");
    }

    #[test]
    fn test_identity_distinguishes_method() {
        let get = Request::get("https://fruit.example/");
        let post = Request::new(Method::Post, "https://fruit.example/");
        assert_ne!(get.identity(), post.identity());
    }

    #[test]
    fn test_accepts_html() {
        let req = Request::get("https://fruit.example/").accept("text/html,application/xhtml+xml");
        assert!(req.accepts_html());

        let req = Request::get("https://fruit.example/app.js").accept("application/javascript");
        assert!(!req.accepts_html());

        let req = Request::get("https://fruit.example/app.js");
        assert!(!req.accepts_html());
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let req = Request::get("https://fruit.example/").header("Accept", "text/html");
        assert_eq!(req.header_value("accept"), Some("text/html"));
        assert_eq!(req.header_value("ACCEPT"), Some("text/html"));
    }

    #[test]
    fn test_response_is_success() {
        assert!(Response::ok("hi").is_success());
        assert!(!Response::new(404, HashMap::new(), Vec::new()).is_success());
    }

    #[test]
    fn test_cacheable_requires_basic_200() {
        assert!(Response::ok("hi").is_cacheable());
        assert!(!Response::new(204, HashMap::new(), Vec::new()).is_cacheable());
        assert!(!Response::ok("hi").with_kind(ResponseKind::Opaque).is_cacheable());
        assert!(!Response::ok("hi").with_kind(ResponseKind::Cors).is_cacheable());
    }

    #[test]
    fn test_response_text() {
        assert_eq!(Response::ok("hello").text().as_deref(), Some("hello"));
        assert!(Response::ok(vec![0xff, 0xfe]).text().is_none());
    }
}
