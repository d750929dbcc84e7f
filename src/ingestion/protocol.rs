//! Ingestion HTTP Protocol
//!
//! Routes and response bodies exposed to the browser collector.

use super::types::FieldError;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Public endpoint accepting one interaction record per request.
pub const ENDPOINT_SUBMIT: &str = "/submit-data/";
/// Same handler without the trailing slash.
pub const ENDPOINT_SUBMIT_BARE: &str = "/submit-data";
/// Liveness probe. Never touches the store.
pub const ENDPOINT_HEALTH: &str = "/health";

pub const STORED_MESSAGE: &str = "Data stored successfully";

// --- Data Transfer Objects ---

/// Acknowledgment for a stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
    /// Identifier assigned by the document store.
    pub id: String,
}

impl Ack {
    pub fn stored(id: String) -> Self {
        Self {
            message: STORED_MESSAGE.to_string(),
            id,
        }
    }
}

/// Body of a 422 response: every field that failed validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

/// Body of a 500 response: the store's error message.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistenceErrorResponse {
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
