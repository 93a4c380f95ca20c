//! Unit tests for error module.

use super::*;
use crate::policy::{ERROR_MEDIA_TYPE, SUPPRESSED_DETAIL};
use axum::http::header;
use serde_json::json;

// ============================================================================
// DomainError Serialization Tests
// ============================================================================

#[test]
fn test_domain_error_serialization() {
    let error = DomainError::new(418, "code", "teapot").with_meta("foobar", 42);

    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(
        value,
        json!({
            "status": 418,
            "detail": "teapot",
            "code": "code",
            "meta": { "foobar": 42 }
        })
    );
}

#[test]
fn test_domain_error_empty_meta_omitted() {
    let error = DomainError::internal(SUPPRESSED_DETAIL);

    let json = serde_json::to_string(&error).unwrap();
    assert!(!json.contains("meta"));
}

#[test]
fn test_domain_error_deserialization_without_meta() {
    let error: DomainError =
        serde_json::from_str(r#"{"status":404,"detail":"gone","code":"not_found"}"#).unwrap();
    assert_eq!(error, DomainError::not_found("gone"));
    assert!(error.meta.is_empty());
}

#[test]
fn test_with_meta_replaces_existing_key() {
    let error = DomainError::bad_request("bad")
        .with_meta("field", "a")
        .with_meta("field", "b");
    assert_eq!(error.meta.len(), 1);
    assert_eq!(error.meta["field"], json!("b"));
}

// ============================================================================
// DomainError Constructor Tests
// ============================================================================

#[test]
fn test_domain_error_constructors() {
    let cases = [
        (DomainError::internal("x"), 500, "internal"),
        (DomainError::bad_request("x"), 400, "bad_request"),
        (DomainError::invalid_request("x"), 400, "invalid_request"),
        (DomainError::unauthorized("x"), 401, "unauthorized"),
        (DomainError::not_found("x"), 404, "not_found"),
        (DomainError::method_not_allowed("x"), 405, "method_not_allowed"),
    ];

    for (error, status, code) in cases {
        assert_eq!(error.status, status);
        assert_eq!(error.code, code);
        assert_eq!(error.detail, "x");
    }
}

#[test]
fn test_status_code_conversion() {
    assert_eq!(
        DomainError::not_found("x").status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        DomainError::new(42, "weird", "x").status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_domain_error_display() {
    let error = DomainError::new(418, "code", "teapot");
    assert_eq!(format!("{}", error), "418 code: teapot");
}

#[test]
fn test_handler_error_display() {
    assert_eq!(format!("{}", HandlerError::generic("boom")), "boom");
    assert_eq!(
        format!("{}", HandlerError::from(DomainError::not_found("gone"))),
        "404 not_found: gone"
    );
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_from_anyhow_keeps_context_chain() {
    let err = anyhow::anyhow!("connection refused").context("loading user");
    match HandlerError::from(err) {
        HandlerError::Generic(message) => {
            assert_eq!(message, "loading user: connection refused");
        }
        other => panic!("expected generic error, got {:?}", other),
    }
}

#[test]
fn test_from_domain_error() {
    let error: HandlerError = DomainError::unauthorized("no token").into();
    assert!(matches!(error, HandlerError::Domain(ref e) if e.status == 401));
}

// ============================================================================
// IntoResponse Tests
// ============================================================================

#[test]
fn test_generic_into_response_is_suppressed() {
    let response = HandlerError::generic("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[header::CONTENT_TYPE], ERROR_MEDIA_TYPE);
}

#[test]
fn test_into_response_keeps_error_in_extensions() {
    let response = HandlerError::generic("boom").into_response();
    let stashed = response.extensions().get::<HandlerError>();
    assert!(matches!(stashed, Some(HandlerError::Generic(m)) if m == "boom"));
}

#[test]
fn test_domain_into_response_status() {
    let response = HandlerError::from(DomainError::new(418, "code", "teapot")).into_response();
    assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
}
