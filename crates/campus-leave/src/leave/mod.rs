//! Leave-management records: status classification and everything the dashboards build on it.

pub mod export;
pub mod filter;
pub mod import;
pub mod record;
pub mod report;
pub mod router;
pub mod source;
pub mod stats;
pub mod status;
pub mod views;

pub use export::{export_csv, ExportError};
pub use filter::LeaveFilter;
pub use import::{parse_payload, LeaveImportError, LeavePayloadImporter};
pub use record::{LeaveEntry, LeaveKind, LeaveRecord};
pub use report::LeaveReport;
pub use router::leave_router;
pub use source::{LeaveRecordSource, SourceError};
pub use stats::LeaveStats;
pub use status::{
    classify, display_label, is_approved_by_principal, is_hod_approved, normalize_status,
    LifecycleState, NormalizedStatus, StatusClassification,
};
pub use views::{LeaveRecordView, StatusBadge};
