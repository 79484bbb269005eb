// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Endpoint configuration
//!
//! An `EndpointConfig` is constructed once and never mutated afterwards.
//! Clients hold a copy; concurrent test cases may share it freely.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default base URL of the booking service under test
pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "BOOKER_BASE_URL";

/// Per-call timeout applied when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint configuration for an [`ApiClient`](crate::http::ApiClient)
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Base URL all request paths are joined onto
    pub base_url: Url,
    /// Headers attached to every request
    pub default_headers: Vec<(String, String)>,
    /// Timeout applied to each call
    pub timeout: Duration,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_BASE_URL is a valid absolute URL
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL must parse"),
            default_headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ],
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl EndpointConfig {
    /// Create a config pointing at the default public service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config for an explicit base URL
    pub fn for_base_url(base_url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(base_url.as_ref())?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "'{}' cannot serve as a base URL",
                base_url.as_ref()
            )));
        }
        Ok(Self {
            base_url: url,
            ..Self::default()
        })
    }

    /// Create a config from the environment, falling back to the default URL
    ///
    /// Reads `BOOKER_BASE_URL` when set.
    pub fn from_env() -> Result<Self> {
        match env::var(BASE_URL_ENV) {
            Ok(url) => Self::for_base_url(url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Resolve a request path against the base URL
    pub fn join(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EndpointConfig::default();
        assert_eq!(config.base_url.as_str(), "https://restful-booker.herokuapp.com/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config
            .default_headers
            .iter()
            .any(|(n, v)| n == "content-type" && v == "application/json"));
        assert!(config
            .default_headers
            .iter()
            .any(|(n, v)| n == "accept" && v == "application/json"));
    }

    #[test]
    fn test_builder_setters() {
        let config = EndpointConfig::for_base_url("http://localhost:3001")
            .unwrap()
            .timeout(Duration::from_secs(3))
            .header("x-trace", "1");

        assert_eq!(config.base_url.host_str(), Some("localhost"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config
            .default_headers
            .iter()
            .any(|(n, v)| n == "x-trace" && v == "1"));
    }

    #[test]
    fn test_join_path() {
        let config = EndpointConfig::for_base_url("http://localhost:3001").unwrap();
        let url = config.join("/booking/42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/booking/42");
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = EndpointConfig::for_base_url("mailto:info@bountyy.fi").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_url_is_url_error() {
        let err = EndpointConfig::for_base_url("not a url").unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }
}
