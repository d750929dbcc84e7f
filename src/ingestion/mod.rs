//! Ingestion Service Module
//!
//! Accepts behavioral telemetry from the browser collector and persists it.
//!
//! ## Workflow
//! 1. **Receive**: `POST /submit-data/` with one JSON interaction record.
//! 2. **Validate**: The payload is checked against the fixed schema in one pass;
//!    any failure yields a 422 listing every bad field, and the store is never touched.
//! 3. **Persist**: The record is inserted as exactly one document into the injected
//!    `DocumentStore`.
//! 4. **Acknowledge**: The store-assigned id is returned, or a 500 with the store's message.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod service;
pub mod types;
pub mod validation;
