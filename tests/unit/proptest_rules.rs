//! Property-based tests for the field rules
//!
//! Uses proptest to verify properties that should hold for all inputs.

use paps_serve::serve::ErrorKind;
use paps_serve::serve::rules;
use proptest::prelude::*;
use serde_json::json;

use crate::common::{paps_with, reject, valid_paps};

proptest! {
    /// Latitude without longitude is always rejected, whatever its value
    #[test]
    fn lone_latitude_always_fails(lat in -90.0f64..=90.0) {
        let err = reject("paps.create", &paps_with("location_lat", json!(lat))).unwrap();
        prop_assert_eq!(err.kind, ErrorKind::CrossField);
        prop_assert_eq!(err.field, "location_lng");
    }

    /// Any in-bounds pair passes
    #[test]
    fn paired_coordinates_in_bounds_pass(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
        let mut body = valid_paps();
        body["location_lat"] = json!(lat);
        body["location_lng"] = json!(lng);
        prop_assert!(reject("paps.create", &body).is_none());
    }

    /// Length bounds hold for any string size
    #[test]
    fn length_matches_bounds(len in 0usize..300) {
        let value = "x".repeat(len);
        let result = rules::length("title", &value, 5, 200);
        prop_assert_eq!(result.is_ok(), (5..=200).contains(&len));
    }

    /// Integer scores pass exactly inside 1..=5
    #[test]
    fn score_range(score in -20i64..20) {
        let passed = reject("asap.rate", &json!({"score": score})).is_none();
        prop_assert_eq!(passed, (1..=5).contains(&score));
    }

    /// Fractional scores never pass
    #[test]
    fn fractional_score_fails(whole in 1i64..5, frac in 0.01f64..0.99) {
        #[allow(clippy::cast_precision_loss)]
        let score = whole as f64 + frac;
        let err = reject("asap.rate", &json!({"score": score})).unwrap();
        prop_assert_eq!(err.kind, ErrorKind::InvalidFormat);
    }

    /// Unknown status strings never pass
    #[test]
    fn unknown_status_rejected(status in "[a-z_]{1,12}") {
        prop_assume!(!["active", "in_progress", "completed", "cancelled", "disputed"].contains(&status.as_str()));
        let err = reject("asap.updateStatus", &json!({"status": status})).unwrap();
        prop_assert_eq!(err.kind, ErrorKind::InvalidFormat);
    }
}
