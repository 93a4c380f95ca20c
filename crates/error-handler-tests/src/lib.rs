//! Integration test helpers for the HTTP error handler.
//!
//! Requests are dispatched in-process with `tower::ServiceExt::oneshot`, so no
//! server needs to be running.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_error_handler::DomainError;
use std::convert::Infallible;
use tower::{Service, ServiceExt};

/// Response with its body collected.
#[derive(Debug)]
pub struct Captured {
    /// Response status.
    pub status: StatusCode,
    /// All `Content-Type` header values, in order.
    pub content_types: Vec<String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Captured {
    /// Body as UTF-8 text.
    ///
    /// # Panics
    /// Panics if the body is not valid UTF-8.
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.body).expect("body should be UTF-8")
    }

    /// Body decoded as a domain error.
    ///
    /// # Panics
    /// Panics if the body is not a serialized domain error.
    #[must_use]
    pub fn domain_error(&self) -> DomainError {
        serde_json::from_slice(&self.body).expect("body should be a domain error")
    }
}

/// Builds a `GET` request for `uri`.
///
/// # Panics
/// Panics if `uri` is invalid.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Sends `request` through `service` and collects the response.
///
/// # Panics
/// Panics if the body cannot be read.
pub async fn send<S>(service: S, request: Request<Body>) -> Captured
where
    S: Service<Request<Body>, Response = Response, Error = Infallible>,
{
    let response = match service.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let status = response.status();
    let content_types = response
        .headers()
        .get_all(header::CONTENT_TYPE)
        .iter()
        .map(|v| v.to_str().unwrap_or_default().to_string())
        .collect();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body")
        .to_vec();

    Captured {
        status,
        content_types,
        body,
    }
}
