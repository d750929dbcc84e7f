use super::error::IngestError;
use super::protocol::Ack;
use super::validation::validate_payload;
use crate::storage::store::{DocumentStore, StoreError};

/// Validates one raw payload and stores it as a single document.
///
/// Validation failures return before the store is touched. Store failures are
/// returned as-is; nothing is retried.
pub async fn submit(store: &dyn DocumentStore, payload: &[u8]) -> Result<Ack, IngestError> {
    let record = match validate_payload(payload) {
        Ok(record) => record,
        Err(errors) => {
            let fields: Vec<&str> = errors
                .iter()
                .map(|e| e.field().unwrap_or("body"))
                .collect();
            tracing::warn!("Rejected interaction payload, invalid fields: {:?}", fields);
            return Err(IngestError::Validation(errors));
        }
    };

    let summary = record.summary();
    let document = record
        .into_document()
        .map_err(|e| StoreError::Encoding(e.to_string()))?;

    match store.insert_one(document).await {
        Ok(id) => {
            tracing::info!(
                id = %id,
                session_duration = summary.session_duration,
                connection_type = %summary.connection_type,
                interaction_keys = summary.interaction_keys,
                feature_keys = summary.feature_keys,
                "Stored interaction record"
            );
            Ok(Ack::stored(id))
        }
        Err(e) => {
            tracing::error!("Failed to store interaction record: {}", e);
            Err(IngestError::Persistence(e))
        }
    }
}
