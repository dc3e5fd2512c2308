//! Incoming HTTP request type.

use std::time::Instant;

use bytes::Bytes;
use http::{HeaderMap, Method};

/// Method, path, query and headers of a request.
///
/// Middleware only ever sees the head; the body goes to the handler.
#[derive(Debug, Clone)]
pub struct RequestHead {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub received_at: Instant,
}

impl RequestHead {
    pub fn new(method: Method, path: impl Into<String>, query: Option<String>, headers: HeaderMap) -> Self {
        Self {
            method,
            path: path.into(),
            query,
            headers,
            received_at: Instant::now(),
        }
    }

    /// Case-insensitive header lookup; non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Whether the query string carries `key`, with or without a value
    /// (`?pretty` and `?pretty=1` both count).
    pub fn has_query_param(&self, key: &str) -> bool {
        self.query
            .as_deref()
            .map(|query| {
                query
                    .split('&')
                    .any(|pair| pair.split('=').next() == Some(key))
            })
            .unwrap_or(false)
    }
}

/// An incoming HTTP request.
#[derive(Debug, Clone)]
pub struct Request {
    head: RequestHead,
    body: Bytes,
}

impl Request {
    pub fn new(head: RequestHead, body: Bytes) -> Self {
        Self { head, body }
    }

    pub fn head(&self) -> &RequestHead { &self.head }
    pub fn method(&self) -> &Method { &self.head.method }
    pub fn path(&self) -> &str { &self.head.path }
    pub fn body(&self) -> &[u8] { &self.body }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.header(name)
    }
}
