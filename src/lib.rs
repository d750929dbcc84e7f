//! Interaction Telemetry Collector Library
//!
//! Captures behavioral telemetry (pointer, keyboard, touch and device sensor data)
//! sent by a browser collector and stores it untouched for offline bot/human
//! classification. The binary (`main.rs`) only wires these modules together.
//!
//! ## Modules
//! - **`ingestion`**: The `POST /submit-data/` path. Validates a payload against the
//!   fixed `InteractionRecord` schema and hands it to the store exactly once.
//! - **`storage`**: The `DocumentStore` contract plus MongoDB and in-memory backends.
//! - **`config`**: Environment and command-line settings.
//! - **`server`**: Router construction with CORS, body limit and tracing layers.

pub mod config;
pub mod ingestion;
pub mod server;
pub mod storage;
