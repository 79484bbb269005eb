// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the Tern harness
//!
//! A thin, stateless wrapper over `reqwest`: one synchronous-feeling call
//! per request, no retries, no shared mutable state. Non-2xx statuses are
//! returned as normal responses; only transport failure is an error.

mod client;
mod request;
mod response;

pub use client::ApiClient;
pub use request::Request;
pub use response::ApiResponse;

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const COOKIE: &str = "cookie";
    pub const SET_COOKIE: &str = "set-cookie";
    pub const AUTHORIZATION: &str = "authorization";
}
