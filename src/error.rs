//! Error types returned by request handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::policy;

#[cfg(test)]
mod tests;

/// Structured error with an explicit HTTP status.
///
/// Serialized as the body of responses carrying the
/// [`ERROR_MEDIA_TYPE`](crate::policy::ERROR_MEDIA_TYPE) content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{status} {code}: {detail}")]
pub struct DomainError {
    /// HTTP status code.
    pub status: u16,
    /// Human-readable detail.
    pub detail: String,
    /// Machine-readable error code.
    pub code: String,
    /// Free-form metadata.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub meta: Map<String, Value>,
}

impl DomainError {
    /// Creates a domain error without metadata.
    pub fn new(status: u16, code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
            code: code.into(),
            meta: Map::new(),
        }
    }

    /// Attaches a metadata entry, replacing any previous value under `key`.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// 500 with code `internal`.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(500, "internal", detail)
    }

    /// 400 with code `bad_request`.
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "bad_request", detail)
    }

    /// 400 with code `invalid_request`.
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::new(400, "invalid_request", detail)
    }

    /// 401 with code `unauthorized`.
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(401, "unauthorized", detail)
    }

    /// 404 with code `not_found`.
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "not_found", detail)
    }

    /// 405 with code `method_not_allowed`.
    pub fn method_not_allowed(detail: impl Into<String>) -> Self {
        Self::new(405, "method_not_allowed", detail)
    }

    /// Returns the status as a [`StatusCode`].
    ///
    /// Values outside 100..=999 cannot be written on the wire and are
    /// reported as 500 instead.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or_else(|_| {
            warn!(status = self.status, code = %self.code, "invalid status on domain error");
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }
}

/// Error returned by a wrapped handler.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HandlerError {
    /// Unstructured error carrying only a message.
    #[error("{0}")]
    Generic(String),

    /// Structured error with its own status, code and metadata.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl HandlerError {
    /// Creates a [`HandlerError::Generic`].
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }
}

impl From<anyhow::Error> for HandlerError {
    fn from(err: anyhow::Error) -> Self {
        HandlerError::Generic(format!("{err:#}"))
    }
}

/// Renders the error with internal detail suppressed and keeps the error in
/// the response extensions so that [`handle_errors`](crate::middleware::handle_errors)
/// can render it again under its own policy.
impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let mut response = policy::render(&self, true).into_response();
        response.extensions_mut().insert(self);
        response
    }
}
