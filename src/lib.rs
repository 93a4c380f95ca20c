//! # HTTP Error Handler
//!
//! Middleware for [Axum](https://crates.io/crates/axum) and
//! [tower](https://crates.io/crates/tower) services that turns errors returned
//! by request handlers into HTTP responses.
//!
//! ## Key Features
//!
//! - **Two error shapes**: handlers fail with either an unstructured message
//!   ([`HandlerError::Generic`]) or a structured [`DomainError`] carrying its
//!   own status, code, detail and metadata.
//!
//! - **Internal detail suppression**: with suppression enabled, unstructured
//!   messages are logged but never sent to clients.
//!
//! - **Infallible wrapping**: a service decorated with [`ErrorHandler`] never
//!   returns an error; every failure becomes exactly one response.
//!
//! - **Structured Logging**: errors are reported through `tracing`.
//!
//! ## Error Mapping
//!
//! | Handler result | Suppression | Status | Content-Type | Body |
//! |----------------|-------------|--------|--------------|------|
//! | `Ok(response)` | any | unchanged | unchanged | unchanged |
//! | `Generic(msg)` | off | 500 | `text/plain` | `"msg"` + newline |
//! | `Generic(msg)` | on | 500 | `application/vnd.error+json` | internal error, detail suppressed |
//! | `Domain(err)` | any | `err.status` | `application/vnd.error+json` | `err` as JSON |
//!
//! ## Domain Error Body
//!
//! ```text
//! { "status": 418, "detail": "teapot", "code": "code", "meta": { "foobar": 42 } }
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use axum::{Router, routing::get};
//! use http_error_handler::{DomainError, ErrorHandler, HandlerError, handle_errors};
//!
//! async fn teapot() -> Result<&'static str, HandlerError> {
//!     Err(DomainError::new(418, "teapot", "short and stout").into())
//! }
//!
//! let app: Router = Router::new()
//!     .route("/teapot", get(teapot))
//!     .layer(axum::middleware::from_fn_with_state(
//!         ErrorHandler::new(true),
//!         handle_errors,
//!     ));
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Demo routes and router configuration |
//! | [`config`] | TOML configuration loading |
//! | [`error`] | Handler error types |
//! | [`middleware`] | The error handler layer and axum middleware |
//! | [`models`] | Demo response bodies |
//! | [`policy`] | Pure mapping from errors to responses |

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod policy;

pub use error::{DomainError, HandlerError};
pub use middleware::{ErrorHandler, ErrorHandlerService, handle_errors};
pub use policy::{ERROR_MEDIA_TYPE, ErrorResponse, render};
