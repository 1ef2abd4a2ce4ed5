use campus_leave::leave::{
    LeaveEntry, LeaveImportError, LeaveKind, LeavePayloadImporter, LeaveRecordSource, SourceError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Leave snapshot held in memory for the lifetime of the process.
#[derive(Default)]
pub(crate) struct InMemoryLeaveSource {
    entries: Option<Vec<LeaveEntry>>,
}

impl InMemoryLeaveSource {
    pub(crate) fn from_path(path: &Path) -> Result<Self, LeaveImportError> {
        let entries = LeavePayloadImporter::from_path(path)?;
        info!(path = %path.display(), records = entries.len(), "leave snapshot loaded");
        Ok(Self::with_entries(entries))
    }

    pub(crate) fn with_entries(entries: Vec<LeaveEntry>) -> Self {
        Self {
            entries: Some(entries),
        }
    }
}

impl LeaveRecordSource for InMemoryLeaveSource {
    fn entries(&self) -> Result<Vec<LeaveEntry>, SourceError> {
        self.entries.clone().ok_or(SourceError::NotLoaded)
    }
}

pub(crate) fn parse_kind(raw: &str) -> Result<LeaveKind, String> {
    LeaveKind::parse(raw)
        .ok_or_else(|| format!("unknown leave kind '{raw}' (expected leave or od)"))
}
