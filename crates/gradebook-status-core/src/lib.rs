#![warn(missing_docs)]
//! # gradebook-status-core
//!
//! ## Purpose
//! Defines the pure data model consumed by the gradebook submission status
//! resolver.
//!
//! ## Responsibilities
//! - Represent assignment and submission state as supplied by the gradebook
//!   data layer.
//! - Bundle that state with precomputed grading-period, enrollment, scoring and
//!   post-policy flags into one [`StatusInput`].
//! - Decode/encode the camelCase JSON input contract.
//!
//! ## Data flow
//! Gradebook data layer emits JSON -> [`StatusInput::from_json_str`] ->
//! resolver -> indicator list handed to the rendering layer.
//!
//! ## Ownership and lifetimes
//! Inputs own their strings and timestamps. A fresh [`StatusInput`] is built for
//! every render, so nothing here is shared or cached.
//!
//! ## Error model
//! Malformed JSON and a blank assignment id return [`CoreError`]. Flag
//! combinations are never rejected, even when they contradict each other.
//!
//! ## Example
//! ```rust
//! use gradebook_status_core::{AssignmentState, StatusInput, SubmissionState};
//!
//! let input = StatusInput::new(AssignmentState::default(), SubmissionState::new("1"));
//! assert!(!input.post_policies_enabled);
//! assert!(!input.submission.is_graded());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Assignment-level state relevant to submission status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentState {
    /// Legacy mute flag; superseded when post policies are enabled.
    pub muted: bool,
    /// Grades must be posted manually instead of automatically.
    pub post_manually: bool,
    /// Assignment is visible to students.
    pub published: bool,
}

impl Default for AssignmentState {
    fn default() -> Self {
        Self {
            muted: false,
            post_manually: false,
            published: true,
        }
    }
}

/// One student's submission for an assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionState {
    /// Owning assignment id, opaque to this crate.
    pub assignment_id: String,
    /// Submission is excused from grading.
    pub excused: bool,
    /// When a grade was last assigned, if ever.
    #[serde(default)]
    pub graded_at: Option<DateTime<Utc>>,
    /// Submission arrived after the due date.
    pub late: bool,
    /// Submission is missing.
    pub missing: bool,
    /// When the grade was posted to the student, if ever.
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    /// Seconds past the due date; may be fractional.
    pub seconds_late: f64,
    /// Submission was dropped by a grading rule. Absent or `null` means `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub drop: bool,
}

impl SubmissionState {
    /// Creates an ungraded, unposted, on-time submission.
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            excused: false,
            graded_at: None,
            late: false,
            missing: false,
            posted_at: None,
            seconds_late: 0.0,
            drop: false,
        }
    }

    /// Returns `true` when a grade exists.
    pub fn is_graded(&self) -> bool {
        self.graded_at.is_some()
    }

    /// Returns `true` when the grade has been posted.
    pub fn is_posted(&self) -> bool {
        self.posted_at.is_some()
    }
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Everything the resolver needs for one render.
///
/// The boolean flags are computed upstream and are deliberately independent:
/// no combination is rejected here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInput {
    /// Assignment state.
    pub assignment: AssignmentState,
    /// Submission state.
    pub submission: SubmissionState,
    /// Student enrollment has been concluded.
    #[serde(default)]
    pub is_concluded: bool,
    /// Submission belongs to a grading period other than the one displayed.
    #[serde(default)]
    pub is_in_other_grading_period: bool,
    /// Submission belongs to a closed grading period.
    #[serde(default)]
    pub is_in_closed_grading_period: bool,
    /// Submission belongs to no grading period.
    #[serde(default)]
    pub is_in_no_grading_period: bool,
    /// Score is excluded from the final grade.
    #[serde(default)]
    pub is_not_counted_for_score: bool,
    /// Post policies feature toggle.
    #[serde(default)]
    pub post_policies_enabled: bool,
}

impl StatusInput {
    /// Creates an input with every flag cleared.
    pub fn new(assignment: AssignmentState, submission: SubmissionState) -> Self {
        Self {
            assignment,
            submission,
            is_concluded: false,
            is_in_other_grading_period: false,
            is_in_closed_grading_period: false,
            is_in_no_grading_period: false,
            is_not_counted_for_score: false,
            post_policies_enabled: false,
        }
    }

    /// Decodes an input from its JSON contract form.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when the JSON is malformed or a required
    /// field is missing.
    /// Returns [`CoreError::InvalidAssignmentId`] when `assignmentId` is blank.
    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let parsed: Self = serde_json::from_str(raw).map_err(CoreError::Codec)?;
        parsed.validated()
    }

    /// Decodes an input from JSON bytes.
    ///
    /// # Errors
    /// Same as [`StatusInput::from_json_str`].
    pub fn from_json_bytes(raw: &[u8]) -> Result<Self, CoreError> {
        let parsed: Self = serde_json::from_slice(raw).map_err(CoreError::Codec)?;
        parsed.validated()
    }

    /// Serializes the input to compact JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(self).map_err(CoreError::Codec)
    }

    fn validated(self) -> Result<Self, CoreError> {
        if self.submission.assignment_id.trim().is_empty() {
            return Err(CoreError::InvalidAssignmentId);
        }

        Ok(self)
    }
}

/// Error type for input decoding failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Submission carries a blank assignment id.
    #[error("submission assignment id is empty")]
    InvalidAssignmentId,
    /// JSON encoding/decoding error.
    #[error("status input codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}
