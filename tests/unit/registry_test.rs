//! Tests for the endpoint registry

use std::collections::BTreeSet;

use paps_serve::serve::{Endpoint, Method, Registry, ServeError, Upload};
use serde_json::json;

use crate::common::{ID, registry, valid_paps};

#[test]
fn standard_registry_size() {
    let registry = registry();
    assert_eq!(registry.len(), 57);
    assert!(!registry.is_empty());
}

#[test]
fn keys_are_unique_and_sorted() {
    let registry = registry();
    let keys: Vec<_> = registry.iter().map(|e| e.key).collect();
    let unique: BTreeSet<_> = keys.iter().copied().collect();
    assert_eq!(keys.len(), unique.len());
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn duplicate_keys_rejected() {
    let result = Registry::new([Endpoint::get("a.b", "/a"), Endpoint::post("a.b", "/b")]);
    assert_eq!(result.unwrap_err(), ServeError::DuplicateOperation("a.b".to_string()));
}

#[test]
fn unknown_key() {
    let err = registry().resolve("paps.teleport").unwrap_err();
    assert_eq!(err, ServeError::UnknownOperation("paps.teleport".to_string()));
    assert_eq!(err.category(), "registry");
    assert_eq!(err.status_code(), 500);
    assert!(err.as_validation().is_none());
}

#[test]
fn public_operations() {
    let public: BTreeSet<_> = registry().iter().filter(|e| !e.auth).map(|e| e.key).collect();
    assert_eq!(
        public,
        BTreeSet::from(["auth.login", "auth.register", "system.categories", "system.uptime"])
    );
}

#[test]
fn every_path_is_absolute_with_id_placeholders() {
    for endpoint in registry().iter() {
        assert!(endpoint.path.starts_with('/'), "{}", endpoint.key);
        for name in endpoint.placeholders() {
            assert!(name.ends_with("_id"), "{} has {name}", endpoint.key);
        }
    }
}

#[test]
fn uploads_are_declared() {
    let registry = registry();
    let uploads: Vec<_> = registry.iter().filter(|e| e.upload.is_some()).map(|e| e.key).collect();
    assert_eq!(
        uploads,
        vec!["asap.uploadMedia", "paps.uploadMedia", "profile.uploadAvatar", "spap.uploadMedia"]
    );
    assert_eq!(
        registry.resolve("profile.uploadAvatar").unwrap().upload,
        Some(Upload { field: "file", multiple: false })
    );
    assert_eq!(
        registry.resolve("paps.uploadMedia").unwrap().upload,
        Some(Upload { field: "media", multiple: true })
    );
}

#[test]
fn body_operations_use_body_methods() {
    for endpoint in registry().iter() {
        if endpoint.upload.is_some() {
            assert_eq!(endpoint.method, Method::Post, "{}", endpoint.key);
        }
    }
    assert!(Method::Put.has_body());
    assert!(!Method::Get.has_body());
}

#[test]
fn resource_filter() {
    let registry = registry();
    let chat: Vec<_> = registry.resource("chat").map(|e| e.key).collect();
    assert_eq!(chat.len(), 8);
    assert!(chat.iter().all(|key| key.starts_with("chat.")));
    assert_eq!(registry.resource("admin").count(), 4);
}

#[test]
fn operations_without_validator_accept_anything() {
    let endpoint = *registry().resolve("spap.accept").unwrap();
    assert!(endpoint.validator.is_none());
    assert!(endpoint.validate(Some(&json!({"anything": 1}))).is_ok());
}

#[test]
fn missing_payload_checked_as_empty_object() {
    let registry = registry();
    assert!(registry.validate("paps.list", None).is_ok());
    let err = registry.validate("paps.create", None).unwrap_err();
    assert_eq!(err.as_validation().unwrap().field, "title");
}

#[test]
fn prepare_renders_and_validates() {
    let registry = registry();
    let prepared = registry
        .prepare("comments.create", &[("paps_id", ID)], Some(json!({"content": "Any tools needed?"})))
        .unwrap();
    assert_eq!(prepared.method, Method::Post);
    assert_eq!(prepared.path, format!("/paps/{ID}/comments"));
    assert!(prepared.auth);

    let err = registry.prepare("paps.update", &[], Some(json!({"title": "New title"}))).unwrap_err();
    assert_eq!(err.as_validation().unwrap().field, "paps_id");
}

#[test]
fn prepare_validates_payload_before_path() {
    let err = registry().prepare("paps.create", &[], Some(json!({}))).unwrap_err();
    assert_eq!(err.as_validation().unwrap().field, "title");
    assert!(registry().prepare("paps.create", &[], Some(valid_paps())).is_ok());
}
