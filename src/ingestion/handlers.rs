use super::error::IngestError;
use super::protocol::{Ack, HealthResponse};
use super::service::submit;
use crate::storage::store::DocumentStore;

use axum::body::Bytes;
use axum::{Extension, Json};
use std::sync::Arc;

// The body is taken as raw bytes so malformed or mistyped payloads reach our own
// validator and produce the structured 422 body.
pub async fn handle_submit_data(
    Extension(store): Extension<Arc<dyn DocumentStore>>,
    body: Bytes,
) -> Result<Json<Ack>, IngestError> {
    submit(store.as_ref(), &body).await.map(Json)
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
