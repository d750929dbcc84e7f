//! Document Storage Module
//!
//! Persists validated interaction records as schemaless documents.
//!
//! ## Backends
//! - **`mongo`**: MongoDB collection. The driver owns connection pooling, so a single
//!   handle serves all concurrent requests.
//! - **`memory`**: A `DashMap`-backed collection for local runs and tests.
//!
//! Both implement the `DocumentStore` trait from **`store`**, which is the only thing
//! the ingestion path sees.

pub mod memory;
pub mod mongo;
pub mod store;

#[cfg(test)]
mod tests;
