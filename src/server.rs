//! HTTP Router
//!
//! Wires the ingestion handlers to their routes and wraps them in the transport
//! layers: CORS allow-list, request body limit and request tracing.

use crate::config::Config;
use crate::ingestion::handlers::{handle_health, handle_submit_data};
use crate::ingestion::protocol::{ENDPOINT_HEALTH, ENDPOINT_SUBMIT, ENDPOINT_SUBMIT_BARE};
use crate::storage::store::DocumentStore;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(store: Arc<dyn DocumentStore>, config: &Config) -> Result<Router> {
    let cors = cors_layer(&config.allowed_origins)?;

    let app = Router::new()
        .route(ENDPOINT_SUBMIT, post(handle_submit_data))
        .route(ENDPOINT_SUBMIT_BARE, post(handle_submit_data))
        .route(ENDPOINT_HEALTH, get(handle_health))
        .layer(Extension(store))
        // axum's own 2 MB default would otherwise cap the configured limit.
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.body_limit_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Credentialed CORS for an explicit origin list.
///
/// Wildcards are not allowed together with credentials, so methods and headers are
/// mirrored from the preflight request instead.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
