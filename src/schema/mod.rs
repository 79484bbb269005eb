// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JSON Schema validation
//!
//! A `SchemaDocument` is loaded from disk once, compiled, and never mutated
//! afterwards; validation is a pure function over the instance. Only the
//! first constraint violation is reported, not the full set.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::http::ApiResponse;

/// Bundled schema for the booking object
pub const BOOKING_SCHEMA_FILE: &str = "schemas/booking_schema.json";

/// Path of the bundled booking schema, anchored at the crate root
pub fn booking_schema_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(BOOKING_SCHEMA_FILE)
}

/// A compiled, read-only JSON Schema document
pub struct SchemaDocument {
    raw: Value,
    compiled: jsonschema::Validator,
}

impl fmt::Debug for SchemaDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaDocument")
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}

/// Load and compile a schema document from disk
///
/// Error kinds are distinct: a missing or unreadable file is [`Error::Io`],
/// a file that is not valid JSON is [`Error::SchemaParse`], and a JSON
/// document that is not a compilable schema is [`Error::SchemaCompile`].
pub fn load_schema(path: impl AsRef<Path>) -> Result<SchemaDocument> {
    let text = fs::read_to_string(path.as_ref())?;
    let raw: Value = serde_json::from_str(&text).map_err(Error::SchemaParse)?;
    SchemaDocument::from_value(raw)
}

impl SchemaDocument {
    /// Compile a schema from an in-memory JSON value
    pub fn from_value(raw: Value) -> Result<Self> {
        let compiled =
            jsonschema::validator_for(&raw).map_err(|e| Error::SchemaCompile(e.to_string()))?;
        Ok(Self { raw, compiled })
    }

    /// Get the raw schema document
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Validate an instance against this schema
    ///
    /// Reports the first violation as [`Error::SchemaViolation`] with the
    /// offending instance path and the constraint description.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        match self.compiled.iter_errors(instance).next() {
            None => Ok(()),
            Some(violation) => Err(Error::SchemaViolation {
                instance_path: violation.instance_path.to_string(),
                message: violation.to_string(),
            }),
        }
    }

    /// Validate a response body against this schema
    pub fn validate_response(&self, response: &ApiResponse) -> Result<()> {
        self.validate(response.json_value()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booking_schema() -> SchemaDocument {
        load_schema(booking_schema_path()).unwrap()
    }

    fn valid_instance() -> Value {
        json!({
            "firstname": "John",
            "lastname": "Doe",
            "totalprice": 1500,
            "depositpaid": true,
            "bookingdates": {
                "checkin": "2025-01-02",
                "checkout": "2025-01-08"
            },
            "additionalneeds": "Breakfast included"
        })
    }

    #[test]
    fn test_valid_instance_passes() {
        assert!(booking_schema().validate(&valid_instance()).is_ok());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut instance = valid_instance();
        instance.as_object_mut().unwrap().remove("firstname");

        let err = booking_schema().validate(&instance).unwrap_err();
        match err {
            Error::SchemaViolation { message, .. } => {
                assert!(message.contains("firstname"), "message: {message}");
            }
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_fails() {
        let mut instance = valid_instance();
        instance["totalprice"] = json!("expensive");
        let err = booking_schema().validate(&instance).unwrap_err();
        assert!(err.is_schema());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let schema = booking_schema();
        let instance = valid_instance();
        assert!(schema.validate(&instance).is_ok());
        assert!(schema.validate(&instance).is_ok());

        let mut broken = instance.clone();
        broken.as_object_mut().unwrap().remove("firstname");
        assert!(schema.validate(&broken).is_err());
        assert!(schema.validate(&broken).is_err());
        // Earlier failures do not poison later successes.
        assert!(schema.validate(&instance).is_ok());
    }

    #[test]
    fn test_uncompilable_schema() {
        let err = SchemaDocument::from_value(json!({"type": "no-such-type"})).unwrap_err();
        assert!(matches!(err, Error::SchemaCompile(_)));
    }
}
