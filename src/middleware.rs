//! Error-handling middleware.
//!
//! [`ErrorHandler`] is both a [`tower::Layer`], decorating services whose
//! error type converts into [`HandlerError`], and the state of the
//! [`handle_errors`] axum middleware for handlers returning
//! `Result<_, HandlerError>`. Either way the resulting service never fails:
//! every error becomes a written response.

use std::convert::Infallible;
use std::future::Future;
use std::task::{Context, Poll};

use axum::extract::{Request, State};
use axum::http;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use tower::util::ServiceFn;
use tower::{Layer, Service, ServiceExt};
use tracing::{debug, error};

use crate::error::HandlerError;
use crate::policy::{self, ErrorResponse};

/// Converts handler errors into responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorHandler {
    suppress_internal: bool,
}

impl ErrorHandler {
    /// Creates a handler. With `suppress_internal` set, messages of
    /// unstructured errors never reach the client.
    #[must_use]
    pub fn new(suppress_internal: bool) -> Self {
        Self { suppress_internal }
    }

    /// Whether unstructured error messages are suppressed.
    #[must_use]
    pub fn suppress_internal(&self) -> bool {
        self.suppress_internal
    }

    /// Logs `err` and maps it to the response to write.
    pub fn handle(&self, err: HandlerError) -> ErrorResponse {
        match &err {
            HandlerError::Generic(message) => {
                error!(
                    message = %message,
                    suppressed = self.suppress_internal,
                    "uncaught handler error"
                );
            }
            HandlerError::Domain(domain) if domain.status >= 500 => {
                error!(status = domain.status, code = %domain.code, detail = %domain.detail, "handler failed");
            }
            HandlerError::Domain(domain) => {
                debug!(status = domain.status, code = %domain.code, "handler returned error");
            }
        }
        policy::render(&err, self.suppress_internal)
    }

    /// Decorates an async function with this handler.
    pub fn wrap<F, Fut, B>(self, f: F) -> ErrorHandlerService<ServiceFn<F>>
    where
        F: FnMut(http::Request<B>) -> Fut,
        Fut: Future<Output = Result<Response, HandlerError>>,
    {
        self.layer(tower::service_fn(f))
    }
}

impl<S> Layer<S> for ErrorHandler {
    type Service = ErrorHandlerService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ErrorHandlerService {
            inner,
            handler: *self,
        }
    }
}

/// Service produced by [`ErrorHandler`].
#[derive(Debug, Clone)]
pub struct ErrorHandlerService<S> {
    inner: S,
    handler: ErrorHandler,
}

impl<S, B> Service<http::Request<B>> for ErrorHandlerService<S>
where
    S: Service<http::Request<B>, Response = Response> + Clone + Send + 'static,
    S::Error: Into<HandlerError>,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    // Readiness is awaited inside `call` so its errors get rendered too.
    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let inner = self.inner.clone();
        let handler = self.handler;

        Box::pin(async move {
            match inner.oneshot(req).await {
                Ok(response) => Ok(response),
                Err(err) => Ok(handler.handle(err.into()).into_response()),
            }
        })
    }
}

/// Axum middleware rendering [`HandlerError`]s returned by handlers.
///
/// Install with `axum::middleware::from_fn_with_state(handler, handle_errors)`.
/// Responses without an error attached pass through unchanged.
pub async fn handle_errors(
    State(handler): State<ErrorHandler>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<HandlerError>() {
        Some(err) => handler.handle(err).into_response(),
        None => response,
    }
}
