// Event payload: ClockEntryRetimedV1.
//
// Purpose
// - Record that an existing entry of the log got a new timestamp.
//
// Responsibilities
// - Address the entry by its position in the log and carry its type so evolve can refuse a
//   mismatched target.
// - Keep the previous timestamp for auditing.

use crate::modules::timeclock::core::clock_event::ClockEventType;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClockEntryRetimedV1 {
    pub index: usize,
    pub entry_type: ClockEventType,
    pub previous: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}
