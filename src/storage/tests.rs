//! Storage Module Tests
//!
//! Covers the in-memory backend through the `DocumentStore` trait, the same way the
//! ingestion path uses it.
//!
//! *Note: the MongoDB backend needs a live server and is only unit-tested for its
//! error mapping (see `mongo.rs`).*

#[cfg(test)]
mod tests {
    use crate::storage::memory::MemoryStore;
    use crate::storage::store::{Document, DocumentStore, StoreError};
    use serde_json::json;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn sample_document(duration: i64) -> Document {
        json!({
            "sessionDuration": duration,
            "userAgent": "UA",
            "features": { "clicks": 3 }
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    // ============================================================
    // MEMORY STORE TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_store_insert_and_get() {
        let store = MemoryStore::new();
        let doc = sample_document(120);

        let id = store.insert_one(doc.clone()).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id), Some(doc));
    }

    #[tokio::test]
    async fn test_memory_store_ids_are_object_id_hex() {
        let store = MemoryStore::new();

        let id = store.insert_one(sample_document(1)).await.unwrap();

        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_memory_store_does_not_deduplicate() {
        let store = MemoryStore::new();

        let first = store.insert_one(sample_document(5)).await.unwrap();
        let second = store.insert_one(sample_document(5)).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_memory_store_get_unknown_id() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(store.get("000000000000000000000000").is_none());
    }

    #[tokio::test]
    async fn test_memory_store_concurrent_inserts() {
        let store = Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for i in 0..50 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert_one(sample_document(i)).await.unwrap()
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        // Every insert lands as its own document
        assert_eq!(ids.len(), 50);
        assert_eq!(store.len(), 50);
        assert_eq!(store.documents().len(), 50);
    }

    // ============================================================
    // STORE ERROR TESTS
    // ============================================================

    #[test]
    fn test_store_error_displays_underlying_message() {
        let err = StoreError::Unavailable("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");

        let err = StoreError::Rejected("E11000 duplicate key".to_string());
        assert_eq!(err.to_string(), "E11000 duplicate key");
    }
}
