//! Mapping from handler errors to HTTP responses.

use axum::body::Bytes;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::error;

use crate::error::{DomainError, HandlerError};

/// Content type of serialized [`DomainError`] bodies.
pub const ERROR_MEDIA_TYPE: &str = "application/vnd.error+json";

/// Content type of unstructured error bodies.
pub const PLAIN_TEXT: &str = "text/plain";

/// Detail written in place of a suppressed internal error message.
pub const SUPPRESSED_DETAIL: &str = "internal error, detail suppressed";

/// Fully determined error response.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Response status.
    pub status: StatusCode,
    /// Value of the `Content-Type` header.
    pub content_type: &'static str,
    /// Serialized body.
    pub body: Bytes,
}

impl ErrorResponse {
    /// Message as a JSON string literal followed by a newline.
    fn plain(status: StatusCode, message: &str) -> Self {
        let mut body = Value::String(message.to_owned()).to_string();
        body.push('\n');
        Self {
            status,
            content_type: PLAIN_TEXT,
            body: Bytes::from(body),
        }
    }

    fn domain(err: &DomainError) -> Self {
        match serde_json::to_vec(err) {
            Ok(body) => Self {
                status: err.status_code(),
                content_type: ERROR_MEDIA_TYPE,
                body: Bytes::from(body),
            },
            Err(e) => {
                error!(error = %e, code = %err.code, "failed to serialize domain error");
                Self::plain(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
            }
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

/// Maps an error and the suppression flag to the response to write.
#[must_use]
pub fn render(err: &HandlerError, suppress_internal: bool) -> ErrorResponse {
    match (err, suppress_internal) {
        (HandlerError::Generic(message), false) => {
            ErrorResponse::plain(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
        (HandlerError::Generic(_), true) => {
            ErrorResponse::domain(&DomainError::internal(SUPPRESSED_DETAIL))
        }
        (HandlerError::Domain(domain), _) => ErrorResponse::domain(domain),
    }
}
