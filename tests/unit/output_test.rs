//! Tests for the Output module

use paps_serve::config::ClientConfig;
use paps_serve::output::{OutputMode, ResolveResult, RouteInfo, ValidateResult};
use paps_serve::serve::{Endpoint, ValidationError};

use crate::common::registry;

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn route_info_from_endpoint() {
    let registry = registry();
    let info = RouteInfo::from(registry.resolve("paps.uploadMedia").unwrap());
    assert_eq!(info.method, "POST");
    assert_eq!(info.path, "/paps/{paps_id}/media");
    assert!(info.auth);
    assert!(!info.validated);
    assert_eq!(info.upload.as_deref(), Some("media[]"));

    let info = RouteInfo::from(registry.resolve("auth.login").unwrap());
    assert!(!info.auth);
    assert!(info.validated);
    assert!(info.upload.is_none());
}

#[test]
fn route_info_serialization_skips_absent_upload() {
    let info = RouteInfo::from(&Endpoint::get("system.uptime", "/uptime").public());
    let json = serde_json::to_string(&info).unwrap();
    assert!(json.contains("\"auth\":false"));
    assert!(!json.contains("upload"));
}

#[test]
fn resolve_result_serialization() {
    let endpoint = Endpoint::put("asap.updateStatus", "/asap/{asap_id}/status");
    let config = ClientConfig {
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    let result = ResolveResult::new(&endpoint, "/asap/1/status".to_string(), &config);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["method"], "PUT");
    assert_eq!(json["url"], "http://localhost:3000/api/asap/1/status");
    assert_eq!(json["auth"], true);
    assert_eq!(json["timeout_secs"], 5);
}

#[test]
fn validate_result_serialization() {
    let passed = ValidateResult {
        key: "asap.rate".to_string(),
        valid: true,
        error: None,
    };
    let json = serde_json::to_string(&passed).unwrap();
    assert!(json.contains("\"valid\":true"));
    assert!(!json.contains("error"));

    let failed = ValidateResult {
        key: "asap.rate".to_string(),
        valid: false,
        error: Some(ValidationError::range("score", "must be between 1 and 5 (got 6)")),
    };
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["error"]["kind"], "RANGE");
    assert_eq!(json["error"]["field"], "score");
}
