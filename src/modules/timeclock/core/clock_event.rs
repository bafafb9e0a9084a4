// A single entry in a user's clock log.
//
// Boundaries
// - Edits replace the timestamp only. The type and the owning user never change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClockEventType {
    ClockIn,
    ClockOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    #[serde(rename = "type")]
    pub event_type: ClockEventType,
    pub timestamp: DateTime<Utc>,
}

impl ClockEvent {
    pub fn new(event_type: ClockEventType, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_type,
            timestamp,
        }
    }

    pub fn clock_in(timestamp: DateTime<Utc>) -> Self {
        Self::new(ClockEventType::ClockIn, timestamp)
    }

    pub fn clock_out(timestamp: DateTime<Utc>) -> Self {
        Self::new(ClockEventType::ClockOut, timestamp)
    }
}

#[cfg(test)]
mod clock_event_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_should_serialize_with_the_persisted_field_names() {
        let at = Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0).unwrap();
        let json = serde_json::to_value(ClockEvent::clock_in(at)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "clockIn", "timestamp": "2026-10-12T09:00:00Z" })
        );
    }

    #[rstest]
    fn it_should_read_a_persisted_clock_out() {
        let event: ClockEvent = serde_json::from_str(
            r#"{ "type": "clockOut", "timestamp": "2026-10-12T17:00:00Z" }"#,
        )
        .unwrap();
        assert_eq!(event.event_type, ClockEventType::ClockOut);
        assert_eq!(
            event.timestamp,
            Utc.with_ymd_and_hms(2026, 10, 12, 17, 0, 0).unwrap()
        );
    }
}
