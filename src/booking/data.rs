// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Test data provider
//!
//! Payloads with stay dates computed relative to today, so fixtures never
//! go stale. The sample guest set mirrors the parametrized cases the
//! booking suite runs.

use chrono::{Duration, Utc};

use super::types::{Booking, BookingDates};

/// Stay window starting `days_from_now` days ahead, lasting `nights` nights
pub fn stay(days_from_now: i64, nights: i64) -> BookingDates {
    let checkin = Utc::now().date_naive() + Duration::days(days_from_now);
    BookingDates {
        checkin,
        checkout: checkin + Duration::days(nights),
    }
}

/// The canonical valid payload: John Doe, deposit paid, one-week stay
pub fn valid_booking() -> Booking {
    Booking {
        firstname: "John".to_string(),
        lastname: "Doe".to_string(),
        totalprice: 1500,
        depositpaid: true,
        bookingdates: stay(1, 6),
        additionalneeds: Some("Breakfast included".to_string()),
    }
}

/// A customized payload with a near-term five-night stay
pub fn booking_with(
    firstname: impl Into<String>,
    lastname: impl Into<String>,
    totalprice: i64,
    depositpaid: bool,
) -> Booking {
    Booking {
        firstname: firstname.into(),
        lastname: lastname.into(),
        totalprice,
        depositpaid,
        bookingdates: stay(2, 5),
        additionalneeds: None,
    }
}

/// Parametrized guest set for multi-booking runs
pub fn sample_bookings() -> Vec<Booking> {
    vec![
        booking_with("John", "Doe", 1500, true),
        booking_with("Alice", "Smith", 2500, false),
        booking_with("Bob", "Johnson", 3000, true),
    ]
}
