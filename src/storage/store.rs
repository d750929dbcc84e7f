//! Document Store Contract
//!
//! The ingestion path depends only on this trait. Concrete backends live in
//! `mongo` (production) and `memory` (local runs and tests).

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// A single schemaless document as handed to a store.
pub type Document = Map<String, Value>;

/// Failures reported by a `DocumentStore`.
///
/// Every variant displays the underlying backend message unchanged, so callers
/// can surface it to clients verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (network, server selection, timeout).
    #[error("{0}")]
    Unavailable(String),
    /// The store refused the write (duplicate key, validation rule, auth).
    #[error("{0}")]
    Rejected(String),
    /// The document could not be encoded into the store's native format.
    #[error("{0}")]
    Encoding(String),
    #[error("{0}")]
    Backend(String),
}

/// A collection that accepts whole documents and assigns their identifiers.
///
/// Implementations must be safe to share across concurrently running requests;
/// the handler holds one `Arc<dyn DocumentStore>` for the life of the process.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document atomically and returns the identifier the store
    /// assigned to it, rendered as a string.
    async fn insert_one(&self, document: Document) -> Result<String, StoreError>;
}
