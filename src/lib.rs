// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Tern - Booking API Contract Test Harness
//!
//! A small Rust harness for exercising a remote booking HTTP API: a
//! stateless request client, reusable response checks, and JSON Schema
//! validation. Built for end-to-end contract tests against the
//! restful-booker service shape.
//!
//! ## Features
//!
//! - Stateless client: one call per request, no retries, no shared state
//! - Immutable endpoint configuration passed in at construction
//! - Non-2xx statuses are responses, not errors; only transport fails
//! - Lazily parsed, cached JSON bodies
//! - Composable checks: status sets, required keys, dotted-path equality
//! - JSON Schema validation with distinct load/parse/violation errors
//! - Explicit tolerated-failure outcome for a known service quirk
//! - Typed booking DTOs and a date-relative test data provider
//!
//! ## Example
//!
//! ```rust,no_run
//! use tern::{BookingService, EndpointConfig};
//! use tern::check::{assert_booking_shape, assert_status_default};
//! use tern::booking::data;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = BookingService::with_config(EndpointConfig::from_env()?)?;
//!
//!     let response = service.create(&data::valid_booking()).await?;
//!     assert_status_default(&response)?;
//!     assert_booking_shape(&response)?;
//!
//!     Ok(())
//! }
//! ```

pub mod booking;
pub mod check;
pub mod config;
pub mod error;
pub mod http;
pub mod schema;

// Re-exports for convenience

// Configuration
pub use config::EndpointConfig;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{ApiClient, ApiResponse, Request};

// Checks
pub use check::{
    assert_booking_shape, assert_contains_keys, assert_field_equals, assert_status,
    assert_status_default, expect_rejection, CheckOutcome,
};

// Schema
pub use schema::{booking_schema_path, load_schema, SchemaDocument};

// Booking domain
pub use booking::{acquire_token, Booking, BookingDates, BookingService, CreatedBooking, Credentials};

/// Tern version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
