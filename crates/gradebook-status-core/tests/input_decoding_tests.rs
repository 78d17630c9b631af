//! Tests decoding of the camelCase gradebook input contract.

use chrono::{TimeZone, Utc};
use gradebook_status_core::{CoreError, StatusInput};

#[test]
fn input_decoding_tests_reads_full_gradebook_payload() {
    let raw = r#"{
        "assignment": {"muted": true, "postManually": true, "published": false},
        "isConcluded": true,
        "isInOtherGradingPeriod": false,
        "isInClosedGradingPeriod": true,
        "isInNoGradingPeriod": false,
        "isNotCountedForScore": true,
        "postPoliciesEnabled": true,
        "submission": {
            "assignmentId": "1",
            "excused": true,
            "gradedAt": "2019-05-01T12:30:00Z",
            "late": true,
            "missing": false,
            "postedAt": null,
            "secondsLate": 3600,
            "drop": true
        }
    }"#;

    let input = StatusInput::from_json_str(raw).expect("payload should decode");
    assert!(input.assignment.muted);
    assert!(input.assignment.post_manually);
    assert!(!input.assignment.published);
    assert!(input.is_concluded);
    assert!(input.is_in_closed_grading_period);
    assert!(input.is_not_counted_for_score);
    assert!(input.post_policies_enabled);
    assert_eq!(input.submission.assignment_id, "1");
    assert_eq!(
        input.submission.graded_at,
        Some(Utc.with_ymd_and_hms(2019, 5, 1, 12, 30, 0).unwrap())
    );
    assert_eq!(input.submission.posted_at, None);
    assert_eq!(input.submission.seconds_late, 3600.0);
    assert!(input.submission.drop);
}

#[test]
fn input_decoding_tests_defaults_optional_submission_fields() {
    let raw = r#"{
        "assignment": {"muted": false, "postManually": false, "published": true},
        "submission": {
            "excused": false,
            "late": false,
            "missing": false,
            "secondsLate": 0,
            "assignmentId": "1"
        }
    }"#;

    let input = StatusInput::from_json_str(raw).expect("payload should decode");
    assert!(!input.submission.drop);
    assert!(!input.submission.is_graded());
    assert!(!input.submission.is_posted());
    assert!(!input.post_policies_enabled);
    assert!(!input.is_in_no_grading_period);
}

#[test]
fn input_decoding_tests_rejects_missing_assignment() {
    let raw = r#"{"submission": {"assignmentId": "1", "excused": false, "late": false,
        "missing": false, "secondsLate": 0}}"#;

    assert!(matches!(
        StatusInput::from_json_str(raw),
        Err(CoreError::Codec(_))
    ));
}

#[test]
fn input_decoding_tests_rejects_non_timestamp_graded_at() {
    let raw = r#"{
        "assignment": {"muted": false, "postManually": false, "published": true},
        "submission": {"assignmentId": "1", "excused": false, "late": false,
            "missing": false, "secondsLate": 0, "gradedAt": "yesterday"}
    }"#;

    assert!(StatusInput::from_json_str(raw).is_err());
}

#[test]
fn input_decoding_tests_accepts_fractional_seconds_late() {
    let raw = r#"{
        "assignment": {"muted": true, "postManually": false, "published": true},
        "submission": {"assignmentId": "1", "excused": false, "late": true,
            "missing": false, "secondsLate": 90.5}
    }"#;

    let input = StatusInput::from_json_str(raw).expect("fractional secondsLate should decode");
    assert_eq!(input.submission.seconds_late, 90.5);
    assert!(input.assignment.muted);
}

#[test]
fn input_decoding_tests_treats_null_drop_as_not_dropped() {
    let raw = r#"{
        "assignment": {"muted": false, "postManually": false, "published": true},
        "submission": {"assignmentId": "1", "excused": false, "late": false,
            "missing": false, "secondsLate": 0, "drop": null}
    }"#;

    let input = StatusInput::from_json_str(raw).expect("null drop should decode");
    assert!(!input.submission.drop);
}
