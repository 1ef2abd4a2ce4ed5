use super::filter::LeaveFilter;
use super::record::LeaveEntry;
use super::stats::LeaveStats;
use super::views::LeaveRecordView;
use serde::Serialize;

/// Filtered record listing together with the summary of exactly those records.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveReport {
    pub summary: LeaveStats,
    pub records: Vec<LeaveRecordView>,
}

impl LeaveReport {
    pub fn build(entries: &[LeaveEntry], filter: &LeaveFilter) -> Self {
        let selected: Vec<&LeaveEntry> = filter.apply(entries).collect();
        let summary = LeaveStats::from_entries(selected.iter().copied());
        let records = selected.into_iter().map(LeaveEntry::to_view).collect();

        Self { summary, records }
    }
}
