//! Ingestion Data Types
//!
//! The validated interaction record and the structured field errors produced while
//! validating it.

use crate::storage::store::Document;
use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One submitted telemetry session, fully validated.
///
/// Field names on the wire (and in the stored document) are camelCase, matching what
/// the browser collector sends. The free-form mappings are kept as raw JSON objects;
/// nothing downstream interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub interaction_data: Map<String, Value>,
    pub features: Map<String, Value>,
    pub session_duration: i64,
    pub user_agent: String,
    pub screen_resolution: String,
    pub connection_type: String,
    pub connection_stability: String,
    pub ip_address: String,
    pub geolocation: String,
    pub device_orientation: Map<String, Value>,
    pub device_motion: Map<String, Value>,
}

impl InteractionRecord {
    /// Consumes the record, producing the document handed to the store.
    pub fn into_document(self) -> Result<Document, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(serde_json::Error::custom(
                "interaction record did not serialize to an object",
            )),
        }
    }

    /// Non-identifying fields that are safe to put in logs.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            session_duration: self.session_duration,
            connection_type: self.connection_type.clone(),
            interaction_keys: self.interaction_data.len(),
            feature_keys: self.features.len(),
        }
    }
}

/// Redacted view of a record. Carries no IP, geolocation, user agent or device data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub session_duration: i64,
    pub connection_type: String,
    pub interaction_keys: usize,
    pub feature_keys: usize,
}

/// A single reason a payload was rejected.
///
/// `loc` is the path to the offending value, starting with `"body"`;
/// `kind` is serialized as `type` (e.g. `missing`, `int_type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    /// The top-level payload field this error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        self.loc.get(1).map(String::as_str)
    }
}
