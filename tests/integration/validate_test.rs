//! `validate` command tests

use predicates::prelude::*;
use tempfile::TempDir;

use super::{ID, paps_serve};

#[test]
fn test_valid_posting() {
    let home = TempDir::new().unwrap();
    paps_serve(&home)
        .args([
            "validate",
            "paps.create",
            "--body",
            r#"{"title":"Mow the lawn","description":"Need help mowing my lawn this weekend please","payment_amount":30}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("payload is valid"));
}

#[test]
fn test_invalid_posting_exits_one() {
    let home = TempDir::new().unwrap();
    paps_serve(&home)
        .args(["validate", "paps.create", "--body", r#"{"title":"Mow","description":"short","payment_amount":30}"#])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("title"));
}

#[test]
fn test_invalid_json_output() {
    let home = TempDir::new().unwrap();
    let output = paps_serve(&home)
        .args(["--json", "validate", "asap.rate", "--body", r#"{"score":5.5}"#])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["error"]["kind"], "INVALID_FORMAT");
    assert_eq!(json["error"]["field"], "score");
}

#[test]
fn test_payload_from_file() {
    let home = TempDir::new().unwrap();
    let body = home.path().join("message.json");
    std::fs::write(&body, r#"{"content":"On my way"}"#).unwrap();

    paps_serve(&home)
        .args(["validate", "chat.send", "--file", body.to_str().unwrap(), "-p", &format!("thread_id={ID}")])
        .assert()
        .success();
}

#[test]
fn test_path_params_are_checked() {
    let home = TempDir::new().unwrap();
    paps_serve(&home)
        .args(["validate", "chat.send", "--body", r#"{"content":"hi"}"#, "-p", "thread_id=42"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("thread_id"));
}

#[test]
fn test_malformed_json_is_an_error() {
    let home = TempDir::new().unwrap();
    paps_serve(&home)
        .args(["validate", "chat.send", "--body", "{content:"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn test_missing_body_checked_as_empty() {
    let home = TempDir::new().unwrap();
    paps_serve(&home).args(["validate", "paps.list"]).assert().success();
    paps_serve(&home)
        .args(["validate", "auth.login"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("login"));
}
