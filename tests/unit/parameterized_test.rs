//! Parameterized boundary tests using test-case
//!
//! Bounds pass, one step past them fails.

use paps_serve::serve::ErrorKind;
use serde_json::{Value, json};
use test_case::test_case;

use crate::common::{chars, paps_with, reject};

fn outcome(key: &str, body: &Value) -> Result<(), ErrorKind> {
    reject(key, body).map_or(Ok(()), |err| Err(err.kind))
}

// =============================================================================
// Numeric ranges
// =============================================================================

#[test_case(0, Err(ErrorKind::Range) ; "score below min")]
#[test_case(1, Ok(()) ; "score min")]
#[test_case(5, Ok(()) ; "score max")]
#[test_case(6, Err(ErrorKind::Range) ; "score above max")]
fn rating_score(score: i64, expected: Result<(), ErrorKind>) {
    assert_eq!(outcome("asap.rate", &json!({"score": score})), expected);
}

#[test_case(-90.0, Ok(()) ; "south pole")]
#[test_case(90.0, Ok(()) ; "north pole")]
#[test_case(-90.5, Err(ErrorKind::Range) ; "below south pole")]
#[test_case(90.5, Err(ErrorKind::Range) ; "above north pole")]
fn latitude(lat: f64, expected: Result<(), ErrorKind>) {
    assert_eq!(outcome("spap.apply", &json!({"location_lat": lat, "location_lng": 0})), expected);
}

#[test_case(-180.0, Ok(()) ; "west bound")]
#[test_case(180.0, Ok(()) ; "east bound")]
#[test_case(-181.0, Err(ErrorKind::Range) ; "past west bound")]
#[test_case(181.0, Err(ErrorKind::Range) ; "past east bound")]
fn longitude(lng: f64, expected: Result<(), ErrorKind>) {
    assert_eq!(outcome("spap.apply", &json!({"location_lat": 0, "location_lng": lng})), expected);
}

#[test_case(0, Err(ErrorKind::Range) ; "no applicants")]
#[test_case(1, Ok(()) ; "one applicant")]
#[test_case(100, Ok(()) ; "hundred applicants")]
#[test_case(101, Err(ErrorKind::Range) ; "too many applicants")]
fn max_applicants(value: i64, expected: Result<(), ErrorKind>) {
    assert_eq!(outcome("paps.create", &paps_with("max_applicants", json!(value))), expected);
}

#[test_case(0, Err(ErrorKind::Range) ; "zero duration")]
#[test_case(1, Ok(()) ; "one minute")]
#[test_case(-5, Err(ErrorKind::Range) ; "negative duration")]
fn estimated_duration(value: i64, expected: Result<(), ErrorKind>) {
    assert_eq!(outcome("paps.create", &paps_with("estimated_duration", json!(value))), expected);
    assert_eq!(outcome("paps.update", &json!({"estimated_duration": value})), expected);
}

#[test_case("limit", 1, Ok(()) ; "limit min")]
#[test_case("limit", 100, Ok(()) ; "limit max")]
#[test_case("limit", 0, Err(ErrorKind::Range) ; "limit zero")]
#[test_case("limit", 101, Err(ErrorKind::Range) ; "limit over")]
#[test_case("offset", 0, Ok(()) ; "offset zero")]
#[test_case("offset", -1, Err(ErrorKind::Range) ; "offset negative")]
fn pagination(field: &str, value: i64, expected: Result<(), ErrorKind>) {
    for key in ["paps.list", "spap.mine", "asap.list", "chat.threads", "comments.list", "admin.users"] {
        assert_eq!(outcome(key, &json!({ field: value })), expected, "{key}");
    }
}

// =============================================================================
// String lengths
// =============================================================================

#[test_case("title", 4, Err(ErrorKind::Length) ; "title below min")]
#[test_case("title", 5, Ok(()) ; "title min")]
#[test_case("title", 200, Ok(()) ; "title max")]
#[test_case("title", 201, Err(ErrorKind::Length) ; "title above max")]
#[test_case("description", 19, Err(ErrorKind::Length) ; "description below min")]
#[test_case("description", 20, Ok(()) ; "description min")]
#[test_case("description", 5000, Ok(()) ; "description max")]
#[test_case("description", 5001, Err(ErrorKind::Length) ; "description above max")]
fn posting_text(field: &str, len: usize, expected: Result<(), ErrorKind>) {
    assert_eq!(outcome("paps.create", &paps_with(field, json!(chars(len)))), expected);
}

#[test_case(2, Err(ErrorKind::Length) ; "username too short")]
#[test_case(3, Ok(()) ; "username min")]
#[test_case(50, Ok(()) ; "username max")]
#[test_case(51, Err(ErrorKind::Length) ; "username too long")]
fn username_length(len: usize, expected: Result<(), ErrorKind>) {
    let body = json!({"username": chars(len), "email": "a@b.io", "password": "pw"});
    assert_eq!(outcome("auth.register", &body), expected);
}

#[test_case(254, Ok(()) ; "email under max")]
#[test_case(255, Ok(()) ; "email max")]
#[test_case(256, Err(ErrorKind::Length) ; "email above max")]
fn email_length(len: usize, expected: Result<(), ErrorKind>) {
    let email = format!("{}@b.io", chars(len - "@b.io".len()));
    let body = json!({"username": "jdoe", "email": email, "password": "pw"});
    assert_eq!(outcome("auth.register", &body), expected);
}

#[test_case(0, Ok(()) ; "empty search")]
#[test_case(200, Ok(()) ; "search max")]
#[test_case(201, Err(ErrorKind::Length) ; "search above max")]
fn search_length(len: usize, expected: Result<(), ErrorKind>) {
    for key in ["paps.list", "admin.users"] {
        assert_eq!(outcome(key, &json!({"search": chars(len)})), expected, "{key}");
    }
}

// =============================================================================
// Enum membership
// =============================================================================

#[test_case("paps.updateStatus", "published", Ok(()) ; "posting published")]
#[test_case("paps.updateStatus", "PUBLISHED", Err(ErrorKind::InvalidFormat) ; "posting case sensitive")]
#[test_case("asap.updateStatus", "in_progress", Ok(()) ; "assignment in progress")]
#[test_case("asap.updateStatus", "in-progress", Err(ErrorKind::InvalidFormat) ; "assignment dashed")]
#[test_case("spap.mine", "withdrawn", Ok(()) ; "application withdrawn")]
#[test_case("spap.mine", "cancelled", Err(ErrorKind::InvalidFormat) ; "application cancelled")]
fn status_membership(key: &str, status: &str, expected: Result<(), ErrorKind>) {
    assert_eq!(outcome(key, &json!({"status": status})), expected);
}
