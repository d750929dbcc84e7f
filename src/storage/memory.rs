use super::store::{Document, DocumentStore, StoreError};

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::oid::ObjectId;

/// In-process document collection.
///
/// Identifiers are freshly generated ObjectIds, so responses look the same as
/// with the MongoDB backend. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    documents: DashMap<String, Document>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Document> {
        self.documents.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> Vec<(String, Document)> {
        self.documents
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, document: Document) -> Result<String, StoreError> {
        let id = ObjectId::new().to_hex();
        self.documents.insert(id.clone(), document);
        tracing::debug!("Stored document {} in memory ({} total)", id, self.len());
        Ok(id)
    }
}
