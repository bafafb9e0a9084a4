// UserTimeState is the clock record owned by one user.
//
// Invariants
// - clocked_in is true exactly when the last appended entry is a clock in.
// - last_clock_in and last_clock_out mirror the most recently appended entry of each type.
// - clock_entries keeps append order. It is not re-sorted after edits.
//
// Boundaries
// - Only evolve mutates this state. Deciders and the aggregator read it.

use crate::modules::timeclock::core::clock_event::{ClockEvent, ClockEventType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTimeState {
    pub clocked_in: bool,
    pub last_clock_in: Option<DateTime<Utc>>,
    pub last_clock_out: Option<DateTime<Utc>>,
    pub clock_entries: Vec<ClockEvent>,
}

impl UserTimeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp of the most recently appended entry of `event_type`.
    pub fn latest_of(&self, event_type: ClockEventType) -> Option<DateTime<Utc>> {
        self.clock_entries
            .iter()
            .rev()
            .find(|entry| entry.event_type == event_type)
            .map(|entry| entry.timestamp)
    }

    /// Whether the log itself says the user is clocked in.
    pub fn clocked_in_by_log(&self) -> bool {
        matches!(
            self.clock_entries.last(),
            Some(entry) if entry.event_type == ClockEventType::ClockIn
        )
    }

    /// True when the cached fields agree with the log.
    pub fn is_consistent(&self) -> bool {
        self.clocked_in == self.clocked_in_by_log()
            && self.last_clock_in == self.latest_of(ClockEventType::ClockIn)
            && self.last_clock_out == self.latest_of(ClockEventType::ClockOut)
    }
}
