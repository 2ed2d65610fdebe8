use std::collections::HashMap;

/// HTTP request methods.
///
/// The server serves static files on GET and accepts POST bodies for
/// logging. Every other method is parsed but answered with 405.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    /// Any method other than GET/POST, kept verbatim for the access log.
    Other(String),
}

impl Method {
    pub fn from_str(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(s) => s.as_str(),
        }
    }
}

/// Header collection preserving insertion order with case-insensitive
/// lookup. Duplicate keys are ignored on insert: the first occurrence wins,
/// matching accumulation order.
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if self.get(&key).is_none() {
            self.entries.push((key, value.into()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A parsed HTTP request. Constructed once per connection by the parser and
/// immutable thereafter.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Request path with the query string already split off.
    pub path: String,
    /// The request target exactly as received, query included. Used for the
    /// access log.
    pub raw_target: String,
    /// HTTP version token, empty when the client omitted it.
    pub version: String,
    pub headers: Headers,
    /// Query parameters split on `&` and the first `=` of each pair.
    pub query: HashMap<String, String>,
    /// Request body; non-empty only for POST with a valid Content-Length.
    pub body: Vec<u8>,
}

impl Request {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Content-Length parsed as a non-negative integer; missing or
    /// non-numeric values count as zero.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// The client's advertised Accept-Encoding value, if any.
    pub fn accept_encoding(&self) -> Option<&str> {
        self.header("Accept-Encoding")
    }
}
