// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Tolerated-failure outcome for a known service quirk
//!
//! The public booking service sometimes answers 500 where 400/422 would be
//! correct, e.g. when a required field is absent from a POST payload. That
//! is a limitation of the external dependency, not something the harness
//! can fix. The tolerance is an explicit, auditable outcome category; it is
//! never a retry and never extends to success statuses.

use crate::error::{Error, Result};
use crate::http::ApiResponse;

/// Outcome of a check that tolerates a known external-service failure mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The service behaved as the contract specifies
    Passed,
    /// The service hit its known failure mode; tolerated, but recorded
    ToleratedFailure { status: u16 },
}

impl CheckOutcome {
    /// Check if this outcome is a tolerated failure
    pub fn is_tolerated(&self) -> bool {
        matches!(self, CheckOutcome::ToleratedFailure { .. })
    }
}

/// Expect the service to reject the request that produced this response
///
/// A 4xx status passes. A 5xx status is the documented quirk and yields
/// [`CheckOutcome::ToleratedFailure`] with a warning log. Any success
/// status fails loudly: the service accepted a payload it must reject.
pub fn expect_rejection(response: &ApiResponse) -> Result<CheckOutcome> {
    let status = response.status_code();

    if response.is_client_error() {
        return Ok(CheckOutcome::Passed);
    }

    if response.is_server_error() {
        tracing::warn!(
            method = %response.method,
            url = %response.url_str(),
            status,
            "service returned 5xx where 4xx is correct; tolerated"
        );
        return Ok(CheckOutcome::ToleratedFailure { status });
    }

    Err(Error::assertion(format!(
        "expected rejection but {} {} returned {}",
        response.method,
        response.url_str(),
        status
    )))
}
