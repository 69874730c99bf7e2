//! End-to-end scenarios through the registry

use paps_serve::serve::{ErrorKind, Method, ServeError};
use serde_json::json;

use crate::common::{paps_with, registry, valid_paps};

#[test]
fn short_posting_is_rejected_on_title_first() {
    let body = json!({"title": "Mow", "description": "short", "payment_amount": 30});
    let err = registry().validate("paps.create", Some(&body)).unwrap_err();
    let err = err.as_validation().unwrap();
    assert_eq!(err.field, "title");
    assert_eq!(err.kind, ErrorKind::Length);
}

#[test]
fn well_formed_draft_posting_passes() {
    assert!(registry().validate("paps.create", Some(&valid_paps())).is_ok());
}

#[test]
fn publishing_without_start_is_cross_field() {
    let body = paps_with("status", json!("published"));
    let err = registry().validate("paps.create", Some(&body)).unwrap_err();
    let err = err.as_validation().unwrap();
    assert_eq!(err.kind, ErrorKind::CrossField);
    assert_eq!(err.field, "start_datetime");
}

#[test]
fn rating_scores() {
    let registry = registry();
    assert!(registry.validate("asap.rate", Some(&json!({"score": 5}))).is_ok());

    let too_high = registry.validate("asap.rate", Some(&json!({"score": 6}))).unwrap_err();
    assert_eq!(too_high.as_validation().unwrap().kind, ErrorKind::Range);

    let fractional = registry.validate("asap.rate", Some(&json!({"score": 5.5}))).unwrap_err();
    assert_eq!(fractional.as_validation().unwrap().kind, ErrorKind::InvalidFormat);
}

#[test]
fn assignment_status_update() {
    let registry = registry();
    let endpoint = registry.resolve("asap.updateStatus").unwrap();
    assert_eq!(endpoint.method, Method::Put);
    assert_eq!(endpoint.path, "/asap/{asap_id}/status");
    assert!(endpoint.auth);

    let err = endpoint.validate(Some(&json!({"status": "archived"}))).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidFormat);
    assert_eq!(err.field, "status");
}

#[test]
fn unknown_operation() {
    let err = registry().resolve("asap.teleport").unwrap_err();
    assert!(matches!(err, ServeError::UnknownOperation(key) if key == "asap.teleport"));
}
