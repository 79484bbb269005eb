// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Booking DTOs
//!
//! These types mirror the remote service's wire format. Dates travel as
//! `YYYY-MM-DD` strings, which is exactly `NaiveDate`'s serde form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stay window of a booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

/// A booking as submitted to and echoed by the service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

impl Booking {
    /// Set the guest name
    pub fn guest(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self.lastname = lastname.into();
        self
    }

    /// Set the total price
    pub fn price(mut self, totalprice: i64) -> Self {
        self.totalprice = totalprice;
        self
    }

    /// Set the deposit flag
    pub fn deposit(mut self, depositpaid: bool) -> Self {
        self.depositpaid = depositpaid;
        self
    }

    /// Set the stay window
    pub fn dates(mut self, bookingdates: BookingDates) -> Self {
        self.bookingdates = bookingdates;
        self
    }

    /// Set additional needs
    pub fn needs(mut self, additionalneeds: impl Into<String>) -> Self {
        self.additionalneeds = Some(additionalneeds.into());
        self
    }
}

/// POST /booking response: the new id plus the echoed booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedBooking {
    pub bookingid: i64,
    pub booking: Booking,
}

/// One entry of the GET /booking listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub bookingid: i64,
}
