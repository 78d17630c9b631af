//! Shared fixtures for resolver integration tests.

use chrono::{DateTime, TimeZone, Utc};
use gradebook_status_core::{AssignmentState, StatusInput, SubmissionState};
use gradebook_status_ui::{IndicatorKind, IndicatorList};

/// Published, unmuted, ungraded submission with every flag cleared.
#[allow(dead_code)]
pub fn baseline_input() -> StatusInput {
    StatusInput::new(AssignmentState::default(), SubmissionState::new("1"))
}

/// Fixed timestamp used for graded/posted fixtures.
#[allow(dead_code)]
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 4, 15, 9, 0, 0).unwrap()
}

/// Counts pills carrying `label`.
#[allow(dead_code)]
pub fn pill_count(list: &IndicatorList, label: &str) -> usize {
    list.count_label(IndicatorKind::Pill, label)
}

/// Counts messages carrying `label`.
#[allow(dead_code)]
pub fn message_count(list: &IndicatorList, label: &str) -> usize {
    list.count_label(IndicatorKind::Message, label)
}
