//! Demo request handlers.
//!
//! Each failing handler exercises one branch of the error mapping.

use anyhow::Context;
use axum::Json;
use axum::extract::Request;
use axum::response::Response;

use crate::error::{DomainError, HandlerError};
use crate::models::HealthResponse;

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fails with an unstructured error.
pub async fn generic_failure() -> Result<Json<HealthResponse>, HandlerError> {
    Err(HandlerError::generic("boom"))
}

/// Fails with a structured error.
pub async fn domain_failure() -> Result<Json<HealthResponse>, HandlerError> {
    Err(DomainError::new(418, "code", "teapot")
        .with_meta("foobar", 42)
        .into())
}

/// Fails with an `anyhow` error propagated through `?`.
pub async fn anyhow_failure() -> Result<Json<HealthResponse>, HandlerError> {
    let port: u16 = "not a port".parse().context("parsing demo port")?;
    Ok(Json(HealthResponse {
        status: port.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Plain service function failing with a structured error that echoes the
/// request path.
pub async fn service_failure(request: Request) -> Result<Response, HandlerError> {
    Err(DomainError::not_found("no handler for this path")
        .with_meta("path", request.uri().path())
        .into())
}
