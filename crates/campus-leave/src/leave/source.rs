use super::record::LeaveEntry;

/// Where the router reads leave records from. The ERP backend fetch itself lives outside this
/// crate; implementations hand over whatever snapshot they already hold.
pub trait LeaveRecordSource: Send + Sync {
    fn entries(&self) -> Result<Vec<LeaveEntry>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no leave snapshot has been loaded")]
    NotLoaded,
    #[error("leave source unavailable: {0}")]
    Unavailable(String),
}

impl LeaveRecordSource for Vec<LeaveEntry> {
    fn entries(&self) -> Result<Vec<LeaveEntry>, SourceError> {
        Ok(self.clone())
    }
}
