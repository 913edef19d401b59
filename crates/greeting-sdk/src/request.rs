//! HTTP Request representation for handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an incoming HTTP request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET, HEAD, ...)
    pub method: String,

    /// Request path (e.g., "/api/hello")
    pub path: String,

    /// Decoded query parameters
    #[serde(default)]
    pub query: HashMap<String, String>,

    /// HTTP headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request ID for tracing
    #[serde(default)]
    pub request_id: String,
}

impl Request {
    /// Get a query parameter as a string reference.
    ///
    /// # Example
    /// ```ignore
    /// // URL: /api/hello?name=Muni
    /// let name = req.query_param("name"); // Some(&"Muni".to_string())
    /// ```
    pub fn query_param(&self, key: &str) -> Option<&String> {
        self.query.get(key)
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            query: HashMap::new(),
            headers: HashMap::new(),
            request_id: String::new(),
        }
    }
}

/// Decode a raw query string (without the leading `?`).
///
/// Uses `application/x-www-form-urlencoded` rules. A key without `=` maps to
/// the empty string. Repeated keys are joined with `,` in order.
pub fn parse_query(raw: &str) -> HashMap<String, String> {
    let mut query: HashMap<String, String> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        query
            .entry(key.into_owned())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    query
}
