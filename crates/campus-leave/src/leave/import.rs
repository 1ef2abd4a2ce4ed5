//! Maps ERP backend JSON payloads into [`LeaveEntry`] values.

use super::record::{LeaveEntry, LeaveKind, LeaveRecord};
use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::debug;

const REGULAR_KEYS: [&str; 4] = ["data", "records", "leaves", "leaveRequests"];
const ON_DUTY_KEYS: [&str; 2] = ["odLeaves", "odLeaveRequests"];

#[derive(Debug, thiserror::Error)]
pub enum LeaveImportError {
    #[error("failed to read leave payload: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid leave payload JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported leave payload shape: {0}")]
    Shape(String),
}

pub struct LeavePayloadImporter;

impl LeavePayloadImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LeaveEntry>, LeaveImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LeaveEntry>, LeaveImportError> {
        let payload: Value = serde_json::from_reader(reader)?;
        entries_from_value(payload)
    }
}

pub fn parse_payload(raw: &str) -> Result<Vec<LeaveEntry>, LeaveImportError> {
    let payload: Value = serde_json::from_str(raw)?;
    entries_from_value(payload)
}

pub fn entries_from_value(payload: Value) -> Result<Vec<LeaveEntry>, LeaveImportError> {
    match payload {
        Value::Array(rows) => Ok(collect_rows(rows, None)),
        Value::Object(mut map) => {
            let mut entries = Vec::new();
            let mut matched = false;

            for (keys, kind) in [
                (&REGULAR_KEYS[..], None),
                (&ON_DUTY_KEYS[..], Some(LeaveKind::OnDuty)),
            ] {
                for key in keys {
                    match map.remove(*key) {
                        Some(Value::Array(rows)) => {
                            matched = true;
                            entries.extend(collect_rows(rows, kind));
                        }
                        Some(Value::Null) | None => {}
                        Some(other) => {
                            return Err(LeaveImportError::Shape(format!(
                                "`{key}` must be an array, found {}",
                                value_kind(&other)
                            )));
                        }
                    }
                }
            }

            if matched {
                Ok(entries)
            } else {
                Err(LeaveImportError::Shape(
                    "expected an array or an object with leave arrays".to_string(),
                ))
            }
        }
        other => Err(LeaveImportError::Shape(format!(
            "expected an array or object, found {}",
            value_kind(&other)
        ))),
    }
}

fn collect_rows(rows: Vec<Value>, kind: Option<LeaveKind>) -> Vec<LeaveEntry> {
    let mut entries = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Value::Object(fields) => entries.push(entry_from_fields(&fields, kind)),
            other => debug!(
                index,
                found = value_kind(&other),
                "skipping non-object leave row"
            ),
        }
    }
    entries
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn entry_from_fields(
    fields: &Map<String, Value>,
    container_kind: Option<LeaveKind>,
) -> LeaveEntry {
    let leave_type = first_text(fields, &["leaveType", "type"]).unwrap_or_default();
    let kind = container_kind.unwrap_or_else(|| kind_from_leave_type(&leave_type));
    let raw_status = first_text(fields, &["status", "statusText"]).unwrap_or_default();

    LeaveEntry {
        id: first_text(fields, &["_id", "id"]).unwrap_or_default(),
        kind,
        applicant: first_text(fields, &["studentName", "facultyName", "applicantName", "name"])
            .unwrap_or_default(),
        leave_type,
        reason: first_text(fields, &["reason"]).unwrap_or_default(),
        from_date: first_text(fields, &["fromDate", "startDate"])
            .as_deref()
            .and_then(parse_date),
        to_date: first_text(fields, &["toDate", "endDate"])
            .as_deref()
            .and_then(parse_date),
        status: LeaveRecord {
            raw_status,
            approved_by_role: first_text(fields, &["approvedByRole"]).unwrap_or_default(),
            approved_by: first_text(fields, &["approvedBy"]).unwrap_or_default(),
        },
    }
}

fn kind_from_leave_type(leave_type: &str) -> LeaveKind {
    let lowered = leave_type.trim().to_lowercase();
    if lowered == "od" || lowered.contains("on duty") || lowered.contains("on-duty") {
        LeaveKind::OnDuty
    } else {
        LeaveKind::Regular
    }
}

// First key holding usable text wins. Numbers become text; null and blanks are skipped.
fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match fields.get(*key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc().date());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_date_supports_rfc3339_and_plain_dates() {
        assert_eq!(
            parse_date("2025-03-04T18:30:00.000Z"),
            NaiveDate::from_ymd_opt(2025, 3, 4)
        );
        assert_eq!(parse_date("2025-03-05"), NaiveDate::from_ymd_opt(2025, 3, 5));
        assert!(parse_date(" ").is_none());
        assert!(parse_date("05/03/2025").is_none());
    }

    #[test]
    fn array_rows_map_backend_field_names() {
        let entries = entries_from_value(json!([
            {
                "_id": "65f1",
                "studentName": "Anitha",
                "leaveType": "Medical",
                "fromDate": "2025-03-04",
                "toDate": "2025-03-06",
                "status": "HOD Approved",
                "approvedBy": "Dr. Kumar",
                "approvedByRole": "HOD"
            }
        ]))
        .expect("payload parses");

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, "65f1");
        assert_eq!(entry.applicant, "Anitha");
        assert_eq!(entry.kind, LeaveKind::Regular);
        assert_eq!(entry.status.raw_status, "HOD Approved");
        assert_eq!(entry.status.approved_by_role, "HOD");
        assert_eq!(entry.to_date, NaiveDate::from_ymd_opt(2025, 3, 6));
    }

    #[test]
    fn status_text_fills_in_for_blank_status() {
        let entries = entries_from_value(json!([
            { "id": 7, "status": "  ", "statusText": "Declined" },
            { "id": 8, "status": null }
        ]))
        .expect("payload parses");

        assert_eq!(entries[0].id, "7");
        assert_eq!(entries[0].status.raw_status, "Declined");
        assert_eq!(entries[1].status, LeaveRecord::default());
    }

    #[test]
    fn object_payload_tags_on_duty_containers() {
        let entries = entries_from_value(json!({
            "leaves": [{ "id": "L1", "status": "pending" }],
            "odLeaves": [{ "id": "OD1", "status": "approved", "approvedByRole": "Principal" }]
        }))
        .expect("payload parses");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, LeaveKind::Regular);
        assert_eq!(entries[1].kind, LeaveKind::OnDuty);
    }

    #[test]
    fn leave_type_marks_on_duty_rows() {
        let entries = entries_from_value(json!([
            { "id": "a", "leaveType": "OD" },
            { "id": "b", "type": "On Duty - Symposium" },
            { "id": "c", "leaveType": "Casual" }
        ]))
        .expect("payload parses");

        let kinds: Vec<_> = entries.iter().map(|entry| entry.kind).collect();
        assert_eq!(
            kinds,
            vec![LeaveKind::OnDuty, LeaveKind::OnDuty, LeaveKind::Regular]
        );
    }

    #[test]
    fn non_object_rows_are_skipped() {
        let entries =
            entries_from_value(json!([42, "text", { "id": "kept" }])).expect("payload parses");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "kept");
    }

    #[test]
    fn unsupported_shapes_are_rejected() {
        assert!(matches!(
            entries_from_value(json!({ "message": "ok" })),
            Err(LeaveImportError::Shape(_))
        ));
        assert!(matches!(
            entries_from_value(json!({ "data": "nope" })),
            Err(LeaveImportError::Shape(_))
        ));
        assert!(matches!(
            parse_payload("not json"),
            Err(LeaveImportError::Json(_))
        ));
    }
}
