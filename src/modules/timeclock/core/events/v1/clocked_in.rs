// Event payload: ClockedInV1.
//
// Purpose
// - Record that the user started working at `at`.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClockedInV1 {
    pub at: DateTime<Utc>,
}

#[cfg(test)]
mod clocked_in_event_tests {
    use super::*;
    use crate::modules::timeclock::core::events::TimeclockEvent;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    fn it_serializes_with_the_variant_tag() {
        let event = TimeclockEvent::ClockedInV1(ClockedInV1 {
            at: Utc.with_ymd_and_hms(2026, 10, 12, 9, 0, 0).unwrap(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "ClockedInV1", "at": "2026-10-12T09:00:00Z" })
        );
    }
}
