use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordClockOut {
    pub at: DateTime<Utc>,
}
