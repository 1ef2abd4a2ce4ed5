use super::record::LeaveEntry;
use super::status::{classify, LifecycleState};
use serde::Serialize;

/// Dashboard summary. `pending + approved + rejected == total` always holds because HOD-approved
/// records stay in the pending bucket until the Principal signs off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeaveStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// HOD-approved records waiting on the Principal; already counted in `pending`.
    pub awaiting_principal: usize,
}

impl LeaveStats {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a LeaveEntry>,
    {
        entries
            .into_iter()
            .fold(Self::default(), |mut stats, entry| {
                stats.record(classify(&entry.status));
                stats
            })
    }

    pub fn record(&mut self, state: LifecycleState) {
        self.total += 1;
        match state {
            LifecycleState::Approved => self.approved += 1,
            LifecycleState::Rejected => self.rejected += 1,
            LifecycleState::HodApproved => {
                self.pending += 1;
                self.awaiting_principal += 1;
            }
            LifecycleState::Pending => self.pending += 1,
        }
    }

    pub fn count(&self, state: LifecycleState) -> usize {
        match state {
            LifecycleState::Pending => self.pending - self.awaiting_principal,
            LifecycleState::HodApproved => self.awaiting_principal,
            LifecycleState::Approved => self.approved,
            LifecycleState::Rejected => self.rejected,
        }
    }
}
