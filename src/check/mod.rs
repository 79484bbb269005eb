// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Response checks
//!
//! Reusable, composable checks over an [`ApiResponse`](crate::http::ApiResponse).
//! Each check either succeeds silently or returns a descriptive error naming
//! expected vs. actual. Checks never retry and never mutate the response.

mod assertions;
mod outcome;
mod path;

pub use assertions::{
    assert_booking_shape, assert_contains_keys, assert_field_equals, assert_status,
    assert_status_default, DEFAULT_ALLOWED_CODES,
};
pub use outcome::{expect_rejection, CheckOutcome};
pub use path::lookup_path;
