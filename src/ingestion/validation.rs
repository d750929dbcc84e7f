//! Payload validation.
//!
//! The payload is checked against the fixed record schema in a single pass. Every
//! problem is collected, so a client learns about all bad fields at once. Unknown
//! fields are ignored.

use super::types::{FieldError, InteractionRecord};
use serde_json::{Map, Value};

const BODY: &str = "body";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Mapping,
    Integer,
    Text,
}

const SCHEMA: [(&str, FieldKind); 11] = [
    ("interactionData", FieldKind::Mapping),
    ("features", FieldKind::Mapping),
    ("sessionDuration", FieldKind::Integer),
    ("userAgent", FieldKind::Text),
    ("screenResolution", FieldKind::Text),
    ("connectionType", FieldKind::Text),
    ("connectionStability", FieldKind::Text),
    ("ipAddress", FieldKind::Text),
    ("geolocation", FieldKind::Text),
    ("deviceOrientation", FieldKind::Mapping),
    ("deviceMotion", FieldKind::Mapping),
];

/// Parses raw request bytes into a record, or returns every field error found.
pub fn validate_payload(payload: &[u8]) -> Result<InteractionRecord, Vec<FieldError>> {
    let value: Value = serde_json::from_slice(payload).map_err(|e| {
        vec![FieldError::new(
            &[BODY],
            format!("JSON decode error: {}", e),
            "json_invalid",
        )]
    })?;

    validate_value(value)
}

pub fn validate_value(value: Value) -> Result<InteractionRecord, Vec<FieldError>> {
    let object = match value {
        Value::Object(object) => object,
        _ => {
            return Err(vec![FieldError::new(
                &[BODY],
                "Input should be a valid dictionary or object to extract fields from",
                "model_type",
            )]);
        }
    };

    let errors = check_fields(&object);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Every field has been type-checked; this cannot fail short of a schema drift
    // between SCHEMA and InteractionRecord.
    serde_json::from_value(Value::Object(object))
        .map_err(|e| vec![FieldError::new(&[BODY], e.to_string(), "value_error")])
}

fn check_fields(object: &Map<String, Value>) -> Vec<FieldError> {
    SCHEMA
        .iter()
        .filter_map(|(name, kind)| match object.get(*name) {
            None => Some(FieldError::new(&[BODY, *name], "Field required", "missing")),
            Some(value) => type_error(name, *kind, value),
        })
        .collect()
}

fn type_error(name: &str, kind: FieldKind, value: &Value) -> Option<FieldError> {
    let (ok, msg, error_kind) = match kind {
        FieldKind::Mapping => (
            value.is_object(),
            "Input should be a valid dictionary",
            "dict_type",
        ),
        FieldKind::Integer => (
            value.as_i64().is_some(),
            "Input should be a valid integer",
            "int_type",
        ),
        FieldKind::Text => (value.is_string(), "Input should be a valid string", "string_type"),
    };

    if ok {
        None
    } else {
        Some(FieldError::new(&[BODY, name], msg, error_kind))
    }
}
