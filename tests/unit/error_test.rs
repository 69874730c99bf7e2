//! Tests for error types

use paps_serve::serve::{ErrorKind, ServeError, ValidationError};

#[test]
fn validation_error_display() {
    let err = ValidationError::required("title");
    assert_eq!(err.to_string(), "title: required field missing");
    assert_eq!(err.kind, ErrorKind::RequiredField);
}

#[test]
fn validation_error_hints() {
    let err = ValidationError::range("score", "must be between 1 and 5 (got 6)");
    assert_eq!(err.category(), "validation");
    assert_eq!(err.status_code(), 400);
}

#[test]
fn invalid_type_is_invalid_format() {
    let err = ValidationError::invalid_type("score", "integer");
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    assert_eq!(err.message, "invalid type: expected integer");
}

#[test]
fn error_kind_codes() {
    assert_eq!(ErrorKind::RequiredField.to_string(), "REQUIRED_FIELD");
    assert_eq!(ErrorKind::InvalidFormat.as_str(), "INVALID_FORMAT");
    assert_eq!(ErrorKind::Length.as_str(), "LENGTH");
    assert_eq!(ErrorKind::Range.as_str(), "RANGE");
    assert_eq!(ErrorKind::CrossField.as_str(), "CROSS_FIELD");
}

#[test]
fn validation_error_serializes_code() {
    let err = ValidationError::cross_field("location_lng", "location_lng is required when location_lat is provided");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["kind"], "CROSS_FIELD");
    assert_eq!(json["field"], "location_lng");
}

#[test]
fn serve_error_wraps_validation() {
    let err: ServeError = ValidationError::length("title", "too short").into();
    assert_eq!(err.category(), "validation");
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.to_string(), "title: too short");
    assert_eq!(err.as_validation().map(|v| v.kind), Some(ErrorKind::Length));
}

#[test]
fn duplicate_operation_message() {
    let err = ServeError::DuplicateOperation("paps.get".to_string());
    assert_eq!(err.to_string(), "duplicate operation: paps.get");
}
