use super::store::{Document, DocumentStore, StoreError};

use anyhow::Result;
use async_trait::async_trait;
use mongodb::bson::{self, Bson};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Client, Collection};

/// MongoDB-backed collection of interaction documents.
///
/// The driver keeps its own connection pool, so one `MongoStore` is shared by
/// every request. Connecting is lazy: an unreachable server surfaces as
/// `StoreError::Unavailable` on the first insert, not at startup.
pub struct MongoStore {
    collection: Collection<bson::Document>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        tracing::info!(
            "MongoDB client ready (database={}, collection={})",
            database,
            collection
        );
        Ok(Self::from_collection(
            client.database(database).collection(collection),
        ))
    }

    pub fn from_collection(collection: Collection<bson::Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, document: Document) -> Result<String, StoreError> {
        let doc = bson::to_document(&document).map_err(|e| StoreError::Encoding(e.to_string()))?;

        let result = self
            .collection
            .insert_one(doc, None)
            .await
            .map_err(map_mongo_error)?;

        Ok(render_id(&result.inserted_id))
    }
}

fn render_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn map_mongo_error(err: MongoError) -> StoreError {
    let message = err.to_string();
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => StoreError::Unavailable(message),
        ErrorKind::Write(_) | ErrorKind::Authentication { .. } => StoreError::Rejected(message),
        ErrorKind::BsonSerialization(_) => StoreError::Encoding(message),
        _ => StoreError::Backend(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_render_object_id_as_hex() {
        let oid = ObjectId::new();
        let rendered = render_id(&Bson::ObjectId(oid));

        assert_eq!(rendered, oid.to_hex());
        assert_eq!(rendered.len(), 24);
    }

    #[test]
    fn test_render_string_id_unquoted() {
        assert_eq!(render_id(&Bson::String("custom-id".to_string())), "custom-id");
    }

    #[test]
    fn test_io_error_maps_to_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = MongoError::from(io);

        match map_mongo_error(err) {
            StoreError::Unavailable(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Unavailable, got {:?}", other),
        }
    }
}
