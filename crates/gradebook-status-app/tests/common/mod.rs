//! Shared fixtures for app integration tests.

use chrono::{TimeZone, Utc};
use gradebook_status_core::{AssignmentState, StatusInput, SubmissionState};

/// Graded, unposted submission on a manually posted assignment.
#[allow(dead_code)]
pub fn graded_unposted_input() -> StatusInput {
    let assignment = AssignmentState {
        muted: true,
        post_manually: true,
        published: true,
    };
    let mut submission = SubmissionState::new("1");
    submission.graded_at = Some(Utc.with_ymd_and_hms(2019, 4, 15, 9, 0, 0).unwrap());
    StatusInput::new(assignment, submission)
}

/// JSON form of [`graded_unposted_input`].
#[allow(dead_code)]
pub fn graded_unposted_json() -> String {
    let encoded = graded_unposted_input()
        .to_json_bytes()
        .expect("fixture should encode");
    String::from_utf8(encoded).expect("fixture should be utf-8")
}
