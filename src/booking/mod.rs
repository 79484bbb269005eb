// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Booking domain: DTOs, test data, typed endpoint wrapper, auth
//!
//! The harness never interprets the business meaning of these fields; they
//! exist so payloads and responses can be built and compared with types
//! instead of hand-rolled JSON.

pub mod auth;
pub mod data;
mod service;
mod types;

pub use auth::{acquire_token, Credentials};
pub use service::{BookingService, AUTH_PATH, BOOKING_PATH};
pub use types::{Booking, BookingDates, BookingSummary, CreatedBooking};
