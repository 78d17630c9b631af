#![warn(missing_docs)]
//! # gradebook-status-ui
//!
//! ## Purpose
//! Decides which status pills and warning messages a gradebook shows for one
//! student's submission.
//!
//! ## Responsibilities
//! - Name every pill and message the gradebook can show, with canonical
//!   English labels.
//! - Map a [`StatusInput`] to an ordered [`IndicatorList`] through independent
//!   predicate rules.
//! - Expose the serialized `{kind, label}` descriptor form consumed by the
//!   rendering layer.
//!
//! ## Data flow
//! [`StatusInput`] -> [`resolve_indicators`] -> [`IndicatorList`] ->
//! rendering layer (badges, inline messages, translation).
//!
//! ## Ownership and lifetimes
//! Indicators are `Copy` enums with `'static` labels; the list owns a small
//! `Vec` and borrows nothing from the input.
//!
//! ## Error model
//! Resolution is infallible. Contradictory upstream flags are passed through
//! unreconciled, one indicator per flag.
//!
//! ## Example
//! ```rust
//! use gradebook_status_core::{AssignmentState, StatusInput, SubmissionState};
//! use gradebook_status_ui::{Indicator, Pill, resolve_indicators};
//!
//! let mut input = StatusInput::new(AssignmentState::default(), SubmissionState::new("1"));
//! input.assignment.muted = true;
//!
//! let indicators = resolve_indicators(&input);
//! assert!(indicators.contains(Indicator::Pill(Pill::Muted)));
//! assert_eq!(indicators.len(), 1);
//! ```

use std::fmt;

use gradebook_status_core::StatusInput;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

/// Visual category of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    /// Compact badge.
    Pill,
    /// Inline warning/informational line.
    Message,
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::Pill => f.write_str("Pill"),
            IndicatorKind::Message => f.write_str("Message"),
        }
    }
}

/// Categorical status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pill {
    /// Assignment is muted (legacy, pre post-policy).
    Muted,
    /// Assignment is unpublished.
    Unpublished,
    /// Submission was dropped by a grading rule.
    Dropped,
    /// Submission is excused.
    Excused,
    /// Grade exists but is hidden from the student.
    Hidden,
}

impl Pill {
    /// Canonical English label.
    pub const fn label(self) -> &'static str {
        match self {
            Pill::Muted => "Muted",
            Pill::Unpublished => "Unpublished",
            Pill::Dropped => "Dropped",
            Pill::Excused => "Excused",
            Pill::Hidden => "Hidden",
        }
    }
}

/// Grading-period, enrollment and scoring warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusMessage {
    /// Submission is outside every grading period.
    NoGradingPeriod,
    /// Submission is in a closed grading period.
    ClosedGradingPeriod,
    /// Submission is in a grading period other than the displayed one.
    OtherGradingPeriod,
    /// Student enrollment has been concluded.
    ConcludedEnrollment,
    /// Score does not count toward the final grade.
    NotCountedForScore,
}

impl StatusMessage {
    /// Canonical English label.
    pub const fn label(self) -> &'static str {
        match self {
            StatusMessage::NoGradingPeriod => "This submission is not in any grading period",
            StatusMessage::ClosedGradingPeriod => "This submission is in a closed grading period",
            StatusMessage::OtherGradingPeriod => "This submission is in another grading period",
            StatusMessage::ConcludedEnrollment => "This student's enrollment has been concluded",
            StatusMessage::NotCountedForScore => "Not calculated in final grade",
        }
    }
}

/// One visible indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// Badge indicator.
    Pill(Pill),
    /// Message indicator.
    Message(StatusMessage),
}

impl Indicator {
    /// Returns the indicator category.
    pub const fn kind(self) -> IndicatorKind {
        match self {
            Indicator::Pill(_) => IndicatorKind::Pill,
            Indicator::Message(_) => IndicatorKind::Message,
        }
    }

    /// Returns the canonical English label.
    pub const fn label(self) -> &'static str {
        match self {
            Indicator::Pill(pill) => pill.label(),
            Indicator::Message(message) => message.label(),
        }
    }

    /// Projects the indicator into its serialized contract form.
    pub fn descriptor(self) -> IndicatorDescriptor {
        IndicatorDescriptor {
            kind: self.kind(),
            label: self.label().to_string(),
        }
    }
}

/// Output contract entry handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorDescriptor {
    /// Indicator category.
    pub kind: IndicatorKind,
    /// Canonical English label.
    pub label: String,
}

/// Ordered indicators for one submission; each indicator appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorList {
    indicators: Vec<Indicator>,
}

impl IndicatorList {
    fn push(&mut self, indicator: Indicator) {
        if !self.indicators.contains(&indicator) {
            self.indicators.push(indicator);
        }
    }

    /// Returns the number of indicators.
    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    /// Returns `true` when nothing should be shown.
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// Iterates indicators in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Indicator> {
        self.indicators.iter()
    }

    /// Returns `true` when `indicator` is present.
    pub fn contains(&self, indicator: Indicator) -> bool {
        self.indicators.contains(&indicator)
    }

    /// Counts indicators of `kind` carrying `label`.
    pub fn count_label(&self, kind: IndicatorKind, label: &str) -> usize {
        self.indicators
            .iter()
            .filter(|indicator| indicator.kind() == kind && indicator.label() == label)
            .count()
    }

    /// Iterates pills only.
    pub fn pills(&self) -> impl Iterator<Item = Pill> + '_ {
        self.indicators.iter().filter_map(|indicator| match indicator {
            Indicator::Pill(pill) => Some(*pill),
            Indicator::Message(_) => None,
        })
    }

    /// Iterates messages only.
    pub fn messages(&self) -> impl Iterator<Item = StatusMessage> + '_ {
        self.indicators.iter().filter_map(|indicator| match indicator {
            Indicator::Message(message) => Some(*message),
            Indicator::Pill(_) => None,
        })
    }

    /// Returns serialized-form descriptors in evaluation order.
    pub fn descriptors(&self) -> Vec<IndicatorDescriptor> {
        self.indicators
            .iter()
            .map(|indicator| indicator.descriptor())
            .collect()
    }
}

impl<'a> IntoIterator for &'a IndicatorList {
    type Item = &'a Indicator;
    type IntoIter = std::slice::Iter<'a, Indicator>;

    fn into_iter(self) -> Self::IntoIter {
        self.indicators.iter()
    }
}

impl Serialize for IndicatorList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.indicators.iter().map(|indicator| indicator.descriptor()))
    }
}

/// Resolves the pills and messages to show for one submission.
///
/// Every rule is evaluated independently: pills first, then messages, each in
/// a fixed order. The same input always yields the same list.
pub fn resolve_indicators(input: &StatusInput) -> IndicatorList {
    let mut list = IndicatorList::default();
    let assignment = &input.assignment;
    let submission = &input.submission;

    if assignment.muted && !input.post_policies_enabled {
        list.push(Indicator::Pill(Pill::Muted));
    }
    if !assignment.published {
        list.push(Indicator::Pill(Pill::Unpublished));
    }
    if submission.drop {
        list.push(Indicator::Pill(Pill::Dropped));
    }
    if submission.excused {
        list.push(Indicator::Pill(Pill::Excused));
    }
    if is_hidden_eligible(input) {
        list.push(Indicator::Pill(Pill::Hidden));
    }

    let messages = [
        (input.is_in_no_grading_period, StatusMessage::NoGradingPeriod),
        (input.is_in_closed_grading_period, StatusMessage::ClosedGradingPeriod),
        (input.is_in_other_grading_period, StatusMessage::OtherGradingPeriod),
        (input.is_concluded, StatusMessage::ConcludedEnrollment),
        (input.is_not_counted_for_score, StatusMessage::NotCountedForScore),
    ];
    for (flag, message) in messages {
        if flag {
            list.push(Indicator::Message(message));
        }
    }

    debug!(
        assignment_id = %submission.assignment_id,
        pills = list.pills().count(),
        messages = list.messages().count(),
        "resolved submission indicators"
    );

    list
}

/// Returns `true` when the "Hidden" pill applies.
///
/// Only evaluated under post policies. A posted grade is never hidden. Manual
/// and automatic posting agree otherwise: an unposted grade is hidden and an
/// ungraded submission has nothing to hide.
pub fn is_hidden_eligible(input: &StatusInput) -> bool {
    if !input.post_policies_enabled {
        return false;
    }

    let submission = &input.submission;
    if submission.is_posted() {
        return false;
    }

    submission.is_graded()
}
