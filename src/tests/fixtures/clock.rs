// Shared clock fixtures. Week of Monday 2026-10-12 is the reference week in tests.

use crate::modules::timeclock::core::clock_event::{ClockEvent, ClockEventType};
use crate::modules::timeclock::core::events::TimeclockEvent;
use crate::modules::timeclock::core::events::v1::clocked_in::ClockedInV1;
use crate::modules::timeclock::core::events::v1::clocked_out::ClockedOutV1;
use crate::modules::timeclock::core::evolve::evolve;
use crate::modules::timeclock::core::state::UserTimeState;
use chrono::{DateTime, TimeZone, Utc};

pub fn on(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid fixture instant")
}

/// Instant on Monday 2026-10-12.
pub fn monday(hour: u32, minute: u32) -> DateTime<Utc> {
    on(2026, 10, 12, hour, minute)
}

/// Instant on Friday 2026-10-16.
pub fn friday(hour: u32, minute: u32) -> DateTime<Utc> {
    on(2026, 10, 16, hour, minute)
}

/// Replays `entries` as clock actions so the cached fields match the log.
pub fn state_from(entries: &[ClockEvent]) -> UserTimeState {
    entries
        .iter()
        .map(|entry| match entry.event_type {
            ClockEventType::ClockIn => TimeclockEvent::ClockedInV1(ClockedInV1 {
                at: entry.timestamp,
            }),
            ClockEventType::ClockOut => TimeclockEvent::ClockedOutV1(ClockedOutV1 {
                at: entry.timestamp,
            }),
        })
        .fold(UserTimeState::new(), evolve)
}
