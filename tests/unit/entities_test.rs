//! Tests for response shapes deserialized from the API

use paps_serve::serve::auth::AuthToken;
use paps_serve::serve::common::{PapsStatus, PaymentType, SpapStatus};
use paps_serve::serve::media::UploadResponse;
use paps_serve::serve::paps::Paps;
use paps_serve::serve::ratings::RatingSummary;
use paps_serve::serve::spap::{AcceptResponse, Spap};
use paps_serve::serve::system::Uptime;
use serde_json::json;

use crate::common::{ID, OTHER_ID};

#[test]
fn posting_defaults() {
    let paps: Paps = serde_json::from_value(json!({
        "id": ID,
        "owner_id": OTHER_ID,
        "title": "Mow the lawn",
        "description": "Need help mowing my lawn this weekend please",
        "payment_amount": 30.0,
        "max_applicants": 10,
        "max_assignees": 1,
        "status": "published",
        "created_at": "2030-01-01T00:00:00Z",
        "updated_at": "2030-01-02T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(paps.status, PapsStatus::Published);
    assert_eq!(paps.payment_type, PaymentType::Fixed);
    assert!(paps.is_public);
    assert!(paps.category_ids.is_empty());
}

#[test]
fn application_round_trip_skips_absent_fields() {
    let spap: Spap = serde_json::from_value(json!({
        "id": ID,
        "paps_id": OTHER_ID,
        "applicant_id": OTHER_ID,
        "status": "pending",
        "applied_at": "2030-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(spap.status, SpapStatus::Pending);
    let json = serde_json::to_string(&spap).unwrap();
    assert!(!json.contains("message"));
}

#[test]
fn accept_response_defaults_open_posting() {
    let response: AcceptResponse = serde_json::from_value(json!({"asap_id": ID})).unwrap();
    assert!(!response.paps_closed);
    assert!(response.chat_thread_id.is_none());
}

#[test]
fn upload_response() {
    let response: UploadResponse = serde_json::from_value(json!({
        "uploaded_media": [
            {"media_id": ID, "media_url": "https://cdn.example.com/a.jpg", "content_type": "image/jpeg"}
        ],
        "media_count": 3
    }))
    .unwrap();
    assert_eq!(response.uploaded_media.len(), 1);
    assert_eq!(response.uploaded_media[0].content_type, "image/jpeg");
}

#[test]
fn small_responses() {
    let token: AuthToken = serde_json::from_value(json!({"token": "abc", "user_id": ID})).unwrap();
    assert!(token.expires_at.is_none());

    let summary: RatingSummary = serde_json::from_value(json!({"count": 0})).unwrap();
    assert!(summary.average.is_none());

    let uptime: Uptime =
        serde_json::from_value(json!({"uptime_seconds": 42, "started_at": "2030-01-01T00:00:00Z"})).unwrap();
    assert_eq!(uptime.uptime_seconds, 42);
}
