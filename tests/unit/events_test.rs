//! Tests for the application-accepted cascade

use paps_serve::serve::ErrorKind;
use paps_serve::serve::common::AsapStatus;
use paps_serve::serve::events::ApplicationAccepted;

fn accepted() -> ApplicationAccepted {
    ApplicationAccepted {
        paps_id: "paps-1".to_string(),
        spap_id: "spap-1".to_string(),
        applicant_id: "worker".to_string(),
        owner_id: "owner".to_string(),
        chat_thread_id: Some("thread-1".to_string()),
    }
}

fn siblings() -> Vec<String> {
    vec!["spap-1".to_string(), "spap-2".to_string(), "spap-3".to_string()]
}

#[test]
fn creates_active_assignment_for_applicant() {
    let cascade = accepted().plan(2, 0, &siblings()).unwrap();
    assert_eq!(cascade.assignment.accepted_user_id, "worker");
    assert_eq!(cascade.assignment.owner_id, "owner");
    assert_eq!(cascade.assignment.status, AsapStatus::Active);
    assert_eq!(cascade.move_chat_thread.as_deref(), Some("thread-1"));
}

#[test]
fn posting_with_room_left_stays_open() {
    let cascade = accepted().plan(3, 1, &siblings()).unwrap();
    assert!(!cascade.close_paps);
    assert!(cascade.reject_applications.is_empty());
}

#[test]
fn filling_the_posting_closes_it_and_rejects_siblings() {
    let cascade = accepted().plan(2, 1, &siblings()).unwrap();
    assert!(cascade.close_paps);
    assert_eq!(cascade.reject_applications, vec!["spap-2".to_string(), "spap-3".to_string()]);
}

#[test]
fn full_posting_refuses_acceptance() {
    let err = accepted().plan(1, 1, &siblings()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CrossField);
    assert_eq!(err.field, "max_assignees");
}
