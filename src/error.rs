// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the Tern test harness
//!
//! The taxonomy separates transport failures (the HTTP exchange could not
//! complete) from assertion failures (a response arrived but did not satisfy
//! a check) and schema violations. A malformed JSON body is its own kind,
//! distinct from a missing key.

use thiserror::Error;

/// Result type alias for Tern operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Tern harness
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP exchange could not complete (connect, DNS, TLS, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing or joining failed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request timed out before a response arrived
    #[error("{method} {url} timed out after {duration_ms}ms")]
    Timeout {
        method: String,
        url: String,
        duration_ms: u64,
    },

    /// Response status was not in the allowed set
    #[error("unexpected status {actual} (allowed {allowed:?}) for {method} {url}")]
    UnexpectedStatus {
        allowed: Vec<u16>,
        actual: u16,
        method: String,
        url: String,
    },

    /// A required key was absent from a JSON object
    #[error("missing key '{key}'; present keys: {present:?}")]
    MissingKey { key: String, present: Vec<String> },

    /// A segment of a dotted field path did not resolve
    #[error("missing segment '{segment}' while walking '{path}'")]
    MissingPathSegment { path: String, segment: String },

    /// A field resolved but held the wrong value
    #[error("value mismatch at '{path}': expected {expected}, got {actual}")]
    ValueMismatch {
        path: String,
        expected: serde_json::Value,
        actual: serde_json::Value,
    },

    /// Response body could not be parsed as JSON
    #[error("response body is not valid JSON: {reason}")]
    MalformedBody { reason: String, snippet: String },

    /// Generic assertion failure (unexpected body shape, ...)
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// Instance did not conform to the schema
    #[error("schema violation at '{instance_path}': {message}")]
    SchemaViolation {
        instance_path: String,
        message: String,
    },

    /// Schema file did not contain valid JSON
    #[error("schema is not valid JSON: {0}")]
    SchemaParse(serde_json::Error),

    /// Schema document could not be compiled
    #[error("schema could not be compiled: {0}")]
    SchemaCompile(String),

    /// Authentication against the service failed
    #[error("authentication failed: {reason}")]
    Authentication {
        reason: String,
        status: Option<u16>,
    },

    /// I/O error (schema file read, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a timeout error
    pub fn timeout(
        method: impl Into<String>,
        url: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Error::Timeout {
            method: method.into(),
            url: url.into(),
            duration_ms,
        }
    }

    /// Create a malformed-body error, keeping a short body snippet for context
    pub fn malformed_body(reason: impl Into<String>, body: &str) -> Self {
        let mut snippet: String = body.chars().take(120).collect();
        if body.chars().count() > 120 {
            snippet.push('…');
        }
        Error::MalformedBody {
            reason: reason.into(),
            snippet,
        }
    }

    /// Create a generic assertion failure
    pub fn assertion<S: Into<String>>(msg: S) -> Self {
        Error::Assertion(msg.into())
    }

    /// Create an authentication error
    pub fn auth(reason: impl Into<String>, status: Option<u16>) -> Self {
        Error::Authentication {
            reason: reason.into(),
            status,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a transport-level failure (network, DNS, timeout)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Timeout { .. } | Error::Url(_)
        )
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if this is an assertion failure
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedStatus { .. }
                | Error::MissingKey { .. }
                | Error::MissingPathSegment { .. }
                | Error::ValueMismatch { .. }
                | Error::Assertion(_)
        )
    }

    /// Check if this is a schema-related failure
    pub fn is_schema(&self) -> bool {
        matches!(
            self,
            Error::SchemaViolation { .. } | Error::SchemaParse(_) | Error::SchemaCompile(_)
        )
    }

    /// Check if the response body failed to parse as JSON
    pub fn is_malformed_body(&self) -> bool {
        matches!(self, Error::MalformedBody { .. })
    }

    /// Get the HTTP status code if this error carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { actual, .. } => Some(*actual),
            Error::Authentication { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
