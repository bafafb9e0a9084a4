// Command data type for clocking in.
//
// Responsibilities
// - Carry the instant of the action, taken by the inbound adapter.
// - Stay independent of the transport (HTTP or GraphQL).

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordClockIn {
    pub at: DateTime<Utc>,
}
