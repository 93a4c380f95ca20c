//! Route configuration.

use crate::api::handlers;
use crate::middleware::{ErrorHandler, handle_errors};
use axum::Router;
use axum::routing::get;

/// Creates the demo router with `handler` applied to every route.
pub fn create_router(handler: ErrorHandler) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Handlers returning `Result<_, HandlerError>`
        .route("/demo/generic", get(handlers::generic_failure))
        .route("/demo/domain", get(handlers::domain_failure))
        .route("/demo/anyhow", get(handlers::anyhow_failure))
        .layer(axum::middleware::from_fn_with_state(handler, handle_errors))
        // Bare service decorated with the layer
        .route_service("/demo/service", handler.wrap(handlers::service_failure))
}
