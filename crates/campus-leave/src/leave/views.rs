use super::record::{LeaveEntry, LeaveKind};
use super::status::{LifecycleState, NormalizedStatus, StatusClassification};
use chrono::NaiveDate;
use serde::Serialize;

/// Badge tone rendered next to a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadge {
    Success,
    Info,
    Danger,
    Neutral,
}

impl StatusBadge {
    pub const fn for_state(state: LifecycleState) -> Self {
        match state {
            LifecycleState::Approved => Self::Success,
            LifecycleState::HodApproved => Self::Info,
            LifecycleState::Rejected => Self::Danger,
            LifecycleState::Pending => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaveRecordView {
    pub id: String,
    pub kind: LeaveKind,
    pub kind_label: &'static str,
    pub applicant: String,
    pub leave_type: String,
    pub reason: String,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub normalized_status: NormalizedStatus,
    pub state: LifecycleState,
    pub status_label: String,
    pub badge: StatusBadge,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub approved_by: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub approved_by_role: String,
}

impl LeaveEntry {
    pub fn to_view(&self) -> LeaveRecordView {
        let StatusClassification {
            normalized,
            state,
            label,
        } = StatusClassification::of(&self.status);

        LeaveRecordView {
            id: self.id.clone(),
            kind: self.kind,
            kind_label: self.kind.label(),
            applicant: self.applicant.clone(),
            leave_type: self.leave_type.clone(),
            reason: self.reason.clone(),
            from_date: self.from_date,
            to_date: self.to_date,
            normalized_status: normalized,
            state,
            status_label: label,
            badge: StatusBadge::for_state(state),
            approved_by: self.status.approved_by.clone(),
            approved_by_role: self.status.approved_by_role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leave::record::LeaveRecord;
    use serde_json::json;

    #[test]
    fn view_serializes_classification_fields() {
        let entry = LeaveEntry {
            id: "L-9".to_string(),
            kind: LeaveKind::OnDuty,
            applicant: "Priya".to_string(),
            status: LeaveRecord::new("approved").with_role("HOD"),
            ..LeaveEntry::default()
        };

        let value = serde_json::to_value(entry.to_view()).expect("view serializes");
        assert_eq!(value["kind"], json!("on_duty"));
        assert_eq!(value["kind_label"], json!("OD Leave"));
        assert_eq!(value["normalized_status"], json!("approved"));
        assert_eq!(value["state"], json!("hod_approved"));
        assert_eq!(
            value["status_label"],
            json!("HOD Approved (Awaiting Principal)")
        );
        assert_eq!(value["badge"], json!("info"));
        assert_eq!(value["approved_by_role"], json!("HOD"));
        assert!(value.get("approved_by").is_none());
    }
}
