use super::protocol::{PersistenceErrorResponse, ValidationErrorResponse};
use super::types::FieldError;
use crate::storage::store::StoreError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Terminal outcome of a failed submission.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The payload does not match the record schema. The store was not contacted.
    #[error("payload failed validation on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
    /// The store did not accept the record.
    #[error("{0}")]
    Persistence(#[from] StoreError),
}

impl IngestError {
    pub fn status(&self) -> StatusCode {
        match self {
            IngestError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IngestError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            IngestError::Validation(detail) => {
                (status, Json(ValidationErrorResponse { detail })).into_response()
            }
            IngestError::Persistence(err) => (
                status,
                Json(PersistenceErrorResponse {
                    detail: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
