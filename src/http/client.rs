// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client implementation
//!
//! `ApiClient` performs one HTTP call per invocation and keeps no state
//! between calls beyond the immutable endpoint configuration. Non-2xx
//! statuses come back as normal responses for the caller to inspect; only
//! transport-level failure (connect, DNS, timeout) is an error.

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;

use super::request::Request;
use super::response::ApiResponse;
use crate::config::EndpointConfig;
use crate::error::{Error, Result};

/// HTTP client bound to one endpoint configuration
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: EndpointConfig,
}

impl ApiClient {
    /// Create a client for the default public service
    pub fn new() -> Result<Self> {
        Self::with_config(EndpointConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(config: EndpointConfig) -> Result<Self> {
        let default_headers = build_header_map(&config.default_headers)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()?;

        tracing::debug!(base_url = %config.base_url, "API client initialized");

        Ok(Self { client, config })
    }

    /// Get the endpoint configuration
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Execute a GET request
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.execute(Request::get(path)).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        self.execute(Request::post(path).json(body)?).await
    }

    /// Execute a PUT request with a JSON body and header overrides
    ///
    /// Overrides are merged over the configured defaults, replacing only the
    /// names they mention (used to inject an auth cookie).
    pub async fn put<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        overrides: &[(String, String)],
    ) -> Result<ApiResponse> {
        self.execute(Request::put(path).json(body)?.headers(overrides))
            .await
    }

    /// Execute a DELETE request with header overrides
    pub async fn delete(&self, path: &str, overrides: &[(String, String)]) -> Result<ApiResponse> {
        self.execute(Request::delete(path).headers(overrides)).await
    }

    /// Execute a request
    pub async fn execute(&self, request: Request) -> Result<ApiResponse> {
        let url = self.config.join(&request.path)?;
        let method = request.method.clone();
        let timeout_ms = self.config.timeout.as_millis() as u64;

        tracing::info!(method = %method, url = %url, "request");
        if let Some(ref body) = request.body {
            tracing::debug!(body = %body, "request body");
        }

        let mut builder = self.client.request(method.clone(), url.clone());

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let start = Instant::now();
        let response = builder
            .send()
            .await
            .map_err(|e| map_transport_error(e, &method, url.as_str(), timeout_ms))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(e, &method, url.as_str(), timeout_ms))?;
        let response_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            time_ms = response_time_ms,
            "response"
        );
        tracing::debug!(body = %String::from_utf8_lossy(&body), "response body");

        Ok(ApiResponse::new(
            status,
            headers,
            body,
            url,
            method,
            response_time_ms,
        ))
    }
}

/// Map a reqwest failure to the harness taxonomy, surfacing timeouts
fn map_transport_error(e: reqwest::Error, method: &Method, url: &str, timeout_ms: u64) -> Error {
    if e.is_timeout() {
        Error::timeout(method.as_str(), url, timeout_ms)
    } else {
        Error::Transport(e)
    }
}

/// Build a reqwest header map from configured name/value pairs
fn build_header_map(pairs: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|e| Error::Config(format!("invalid header name '{name}': {e}")))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|e| Error::Config(format!("invalid header value for '{name:?}': {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
