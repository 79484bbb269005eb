// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Dotted-path lookup over JSON values
//!
//! Explicit recursive descent over `serde_json::Value`: objects are entered
//! by key, arrays by numeric index. No reflection, no wildcard syntax.

use serde_json::Value;

use crate::error::{Error, Result};

/// Resolve a dot-separated path (e.g. "booking.bookingdates.checkin")
/// against a JSON value
///
/// Fails with [`Error::MissingPathSegment`] naming the first segment that
/// does not resolve.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value> {
    let segments: Vec<&str> = path.split('.').collect();
    descend(value, path, &segments)
}

fn descend<'a>(value: &'a Value, full_path: &str, segments: &[&str]) -> Result<&'a Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(value);
    };

    let next = match value {
        Value::Object(map) => map.get(*segment),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    };

    match next {
        Some(next) => descend(next, full_path, rest),
        None => Err(Error::MissingPathSegment {
            path: full_path.to_string(),
            segment: segment.to_string(),
        }),
    }
}
