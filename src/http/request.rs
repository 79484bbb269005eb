// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request representation
//!
//! A `Request` is transient: constructed, executed once by
//! [`ApiClient`](super::ApiClient), and discarded. The path is relative to
//! the client's base URL; header overrides are merged over the configured
//! defaults at send time.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// A single outbound API request
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Path relative to the base URL, e.g. "/booking/42"
    pub path: String,
    /// Optional JSON body
    pub body: Option<Value>,
    /// Header overrides merged over the client defaults
    pub headers: Vec<(String, String)>,
}

impl Request {
    /// Create a new request with an arbitrary method
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Create a new GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a new POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a new PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Create a new DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set a JSON body
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(data)?);
        Ok(self)
    }

    /// Set a header override
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set multiple header overrides
    pub fn headers(mut self, headers: &[(String, String)]) -> Self {
        self.headers.extend_from_slice(headers);
        self
    }
}
