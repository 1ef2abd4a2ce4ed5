use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status snapshot of a leave or OD-leave record as the backend reports it.
///
/// Absent fields are empty strings; the classifier never sees `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    #[serde(default)]
    pub raw_status: String,
    #[serde(default)]
    pub approved_by_role: String,
    #[serde(default)]
    pub approved_by: String,
}

impl LeaveRecord {
    pub fn new(raw_status: impl Into<String>) -> Self {
        Self {
            raw_status: raw_status.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.approved_by_role = role.into();
        self
    }

    pub fn with_approver(mut self, approver: impl Into<String>) -> Self {
        self.approved_by = approver.into();
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    #[default]
    Regular,
    OnDuty,
}

impl LeaveKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "Leave",
            Self::OnDuty => "OD Leave",
        }
    }

    /// Lenient parse used by query strings and CLI flags.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "leave" | "regular" => Some(Self::Regular),
            "od" | "od_leave" | "od-leave" | "on_duty" | "on-duty" | "on duty" => {
                Some(Self::OnDuty)
            }
            _ => None,
        }
    }
}

/// A single leave request with the fields the dashboards filter and export on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveEntry {
    pub id: String,
    pub kind: LeaveKind,
    pub applicant: String,
    pub leave_type: String,
    pub reason: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub status: LeaveRecord,
}
