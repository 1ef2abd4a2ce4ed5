//! Status normalization and two-tier approval classification.
//!
//! Every function here is total: blank or unrecognized input never fails, it falls through to
//! [`LifecycleState::Pending`] or to a passthrough [`NormalizedStatus::Other`] token.

use super::record::LeaveRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

const REJECTION_CUES: [&str; 3] = ["reject", "denied", "declined"];
const PENDING_CUES: [&str; 3] = ["pending", "await", "requested"];
const PRINCIPAL_STATUS_CUES: [&str; 3] = [
    "principal approved",
    "principal-approved",
    "principle approved",
];
const HOD_STATUS_CUES: [&str; 2] = ["hod approved", "hod-approved"];
const HOD_ROLE_CUES: [&str; 2] = ["hod", "head"];

/// Canonical form of a raw status string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NormalizedStatus {
    Empty,
    Approved,
    Rejected,
    Pending,
    /// Lowercased, trimmed text that matched no known cue.
    Other(String),
}

impl NormalizedStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Pending => "pending",
            Self::Other(token) => token,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for NormalizedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NormalizedStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Derived lifecycle of a leave record under the HOD then Principal approval chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Pending,
    HodApproved,
    Approved,
    Rejected,
}

impl LifecycleState {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Pending,
            Self::HodApproved,
            Self::Approved,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::HodApproved => "HOD Approved (Awaiting Principal)",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether the record still needs action from an approver.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Pending | Self::HodApproved)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the views need about a record's status, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClassification {
    pub normalized: NormalizedStatus,
    pub state: LifecycleState,
    pub label: String,
}

impl StatusClassification {
    pub fn of(record: &LeaveRecord) -> Self {
        Self {
            normalized: normalize_status(&record.raw_status),
            state: classify(record),
            label: display_label(record),
        }
    }
}

pub fn normalize_status(raw: &str) -> NormalizedStatus {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return NormalizedStatus::Empty;
    }

    if contains_any(&lowered, &REJECTION_CUES) {
        NormalizedStatus::Rejected
    } else if has_approve_word(&lowered) || lowered.contains("accept") {
        NormalizedStatus::Approved
    } else if contains_any(&lowered, &PENDING_CUES) {
        NormalizedStatus::Pending
    } else {
        NormalizedStatus::Other(lowered)
    }
}

pub fn is_approved_by_principal(record: &LeaveRecord) -> bool {
    if normalize_status(&record.raw_status) != NormalizedStatus::Approved {
        return false;
    }

    let role = record.approved_by_role.to_lowercase();
    let approver = record.approved_by.to_lowercase();
    let status = record.raw_status.to_lowercase();

    role.contains("principal")
        || approver.contains("principal")
        || contains_any(&status, &PRINCIPAL_STATUS_CUES)
}

pub fn is_hod_approved(record: &LeaveRecord) -> bool {
    if is_approved_by_principal(record) {
        return false;
    }

    let role = record.approved_by_role.to_lowercase();
    let status = record.raw_status.to_lowercase();

    normalize_status(&record.raw_status) == NormalizedStatus::Approved
        || contains_any(&role, &HOD_ROLE_CUES)
        || contains_any(&status, &HOD_STATUS_CUES)
}

/// Checked in order: principal approval, HOD approval, rejection, then pending.
pub fn classify(record: &LeaveRecord) -> LifecycleState {
    if is_approved_by_principal(record) {
        LifecycleState::Approved
    } else if is_hod_approved(record) {
        LifecycleState::HodApproved
    } else if normalize_status(&record.raw_status) == NormalizedStatus::Rejected {
        LifecycleState::Rejected
    } else {
        LifecycleState::Pending
    }
}

pub fn display_label(record: &LeaveRecord) -> String {
    match classify(record) {
        LifecycleState::Pending => match normalize_status(&record.raw_status) {
            NormalizedStatus::Other(token) => capitalize_first(&token),
            _ => LifecycleState::Pending.label().to_string(),
        },
        state => state.label().to_string(),
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

// "approve" and "approved" only as whole words, so "disapproved" or "unapproved" stay unmatched.
// Underscores join words, as in a regex word boundary.
fn has_approve_word(lowered: &str) -> bool {
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|word| word == "approve" || word == "approved")
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
