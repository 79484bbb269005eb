// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Assertion helpers over API responses

use serde_json::{Map, Value};

use super::path::lookup_path;
use crate::error::{Error, Result};
use crate::http::ApiResponse;

/// Status codes accepted when the caller does not name a set
pub const DEFAULT_ALLOWED_CODES: &[u16] = &[200, 201];

const BOOKING_TOP_KEYS: &[&str] = &["bookingid", "booking"];
const BOOKING_KEYS: &[&str] = &[
    "firstname",
    "lastname",
    "totalprice",
    "depositpaid",
    "bookingdates",
];
const BOOKING_DATE_KEYS: &[&str] = &["checkin", "checkout"];

/// Check that the response status is in the allowed set
pub fn assert_status(response: &ApiResponse, allowed: &[u16]) -> Result<()> {
    let actual = response.status_code();
    if allowed.contains(&actual) {
        return Ok(());
    }
    Err(Error::UnexpectedStatus {
        allowed: allowed.to_vec(),
        actual,
        method: response.method.to_string(),
        url: response.url_str().to_string(),
    })
}

/// Check that the response status is 200 or 201
pub fn assert_status_default(response: &ApiResponse) -> Result<()> {
    assert_status(response, DEFAULT_ALLOWED_CODES)
}

/// Check that the response body is a JSON object containing every required key
///
/// A body that fails to parse is reported as [`Error::MalformedBody`];
/// each missing key fails fast with [`Error::MissingKey`].
pub fn assert_contains_keys(response: &ApiResponse, required: &[&str]) -> Result<()> {
    let body = response.json_value()?;
    let object = as_object(body)?;
    require_keys(object, required)
}

/// Composite check for the create-booking response shape
///
/// Top level must hold `bookingid` and `booking`; `booking` must hold the
/// guest fields and `bookingdates`; `bookingdates` must hold `checkin` and
/// `checkout`. Fails fast on the first missing key.
pub fn assert_booking_shape(response: &ApiResponse) -> Result<()> {
    assert_contains_keys(response, BOOKING_TOP_KEYS)?;

    let body = response.json_value()?;
    let booking = as_object(&body["booking"])?;
    require_keys(booking, BOOKING_KEYS)?;

    let dates = as_object(&booking["bookingdates"])?;
    require_keys(dates, BOOKING_DATE_KEYS)
}

/// Check that the field at a dotted path equals the expected value
///
/// Equality is `serde_json::Value` equality: exact, by value, and
/// Unicode-preserving for strings.
pub fn assert_field_equals(response: &ApiResponse, path: &str, expected: &Value) -> Result<()> {
    let body = response.json_value()?;
    let actual = lookup_path(body, path)?;
    if actual == expected {
        return Ok(());
    }
    Err(Error::ValueMismatch {
        path: path.to_string(),
        expected: expected.clone(),
        actual: actual.clone(),
    })
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        Error::assertion(format!("expected a JSON object, got {}", kind_of(value)))
    })
}

fn require_keys(object: &Map<String, Value>, required: &[&str]) -> Result<()> {
    for key in required {
        if !object.contains_key(*key) {
            return Err(Error::MissingKey {
                key: (*key).to_string(),
                present: object.keys().cloned().collect(),
            });
        }
    }
    Ok(())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
