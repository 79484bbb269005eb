// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Token acquisition for auth-protected endpoints
//!
//! Credentials come from the environment; callers that get `None` from
//! [`Credentials::from_env`] are expected to skip auth-dependent work
//! rather than fail. The service answers bad credentials with HTTP 200 and
//! a `reason` body instead of a 401, so a missing token field must be
//! treated as a failure too.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::http::ApiClient;

use super::service::AUTH_PATH;

/// Environment variable holding the admin username
pub const USERNAME_ENV: &str = "ADMIN_USERNAME";

/// Environment variable holding the admin password
pub const PASSWORD_ENV: &str = "ADMIN_PASSWORD";

/// Username/password pair for the token endpoint
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    token: Option<String>,
    reason: Option<String>,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `ADMIN_USERNAME` / `ADMIN_PASSWORD`
    ///
    /// Returns `None` when either variable is unset, so callers can skip.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var(USERNAME_ENV).ok()?;
        let password = std::env::var(PASSWORD_ENV).ok()?;
        Some(Self::new(username, password))
    }
}

/// Obtain an auth token via POST /auth
pub async fn acquire_token(client: &ApiClient, credentials: &Credentials) -> Result<String> {
    let response = client.post(AUTH_PATH, credentials).await?;
    let status = response.status_code();

    if !response.is_success() {
        return Err(Error::auth(
            format!("token endpoint returned {status}"),
            Some(status),
        ));
    }

    let body: TokenBody = response.json()?;
    match body.token {
        Some(token) => Ok(token),
        None => Err(Error::auth(
            body.reason.unwrap_or_else(|| "no token in response".to_string()),
            Some(status),
        )),
    }
}
