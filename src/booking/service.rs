// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Typed wrapper over the booking endpoints
//!
//! Returns raw [`ApiResponse`] values so callers can run their own checks;
//! `create_parsed` is the one convenience that also deserializes. Update
//! and remove require the auth cookie issued by [`acquire_token`](super::acquire_token).

use crate::config::EndpointConfig;
use crate::error::Result;
use crate::http::{headers, ApiClient, ApiResponse};

use super::types::{Booking, CreatedBooking};

/// Booking collection endpoint
pub const BOOKING_PATH: &str = "/booking";

/// Token issuing endpoint
pub const AUTH_PATH: &str = "/auth";

/// Typed client for the booking service
#[derive(Debug, Clone)]
pub struct BookingService {
    client: ApiClient,
}

impl BookingService {
    /// Create a service bound to a configuration
    pub fn with_config(config: EndpointConfig) -> Result<Self> {
        Ok(Self {
            client: ApiClient::with_config(config)?,
        })
    }

    /// Get the underlying client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// POST /booking
    pub async fn create(&self, booking: &Booking) -> Result<ApiResponse> {
        self.client.post(BOOKING_PATH, booking).await
    }

    /// POST /booking, deserializing the created id and echoed booking
    pub async fn create_parsed(&self, booking: &Booking) -> Result<CreatedBooking> {
        self.create(booking).await?.json()
    }

    /// GET /booking
    pub async fn list(&self) -> Result<ApiResponse> {
        self.client.get(BOOKING_PATH).await
    }

    /// GET /booking/{id}
    pub async fn get(&self, id: i64) -> Result<ApiResponse> {
        self.client.get(&format!("{BOOKING_PATH}/{id}")).await
    }

    /// PUT /booking/{id} with the auth cookie
    pub async fn update(&self, id: i64, booking: &Booking, token: &str) -> Result<ApiResponse> {
        self.client
            .put(
                &format!("{BOOKING_PATH}/{id}"),
                booking,
                &[cookie_override(token)],
            )
            .await
    }

    /// DELETE /booking/{id} with the auth cookie
    pub async fn remove(&self, id: i64, token: &str) -> Result<ApiResponse> {
        self.client
            .delete(&format!("{BOOKING_PATH}/{id}"), &[cookie_override(token)])
            .await
    }
}

/// Cookie header override carrying the auth token
fn cookie_override(token: &str) -> (String, String) {
    (headers::COOKIE.to_string(), format!("token={token}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_override_format() {
        let (name, value) = cookie_override("abc123");
        assert_eq!(name, "cookie");
        assert_eq!(value, "token=abc123");
    }
}
