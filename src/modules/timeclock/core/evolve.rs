use crate::modules::timeclock::core::clock_event::{ClockEvent, ClockEventType};
use crate::modules::timeclock::core::events::TimeclockEvent;
use crate::modules::timeclock::core::state::UserTimeState;

/// Apply one event to the clock record. The log and the cached fields always move together.
pub fn evolve(mut state: UserTimeState, event: TimeclockEvent) -> UserTimeState {
    match event {
        TimeclockEvent::ClockedInV1(e) => {
            state.clocked_in = true;
            state.last_clock_in = Some(e.at);
            state.clock_entries.push(ClockEvent::clock_in(e.at));
            state
        }
        TimeclockEvent::ClockedOutV1(e) => {
            state.clocked_in = false;
            state.last_clock_out = Some(e.at);
            state.clock_entries.push(ClockEvent::clock_out(e.at));
            state
        }
        TimeclockEvent::ClockEntryRetimedV1(e) => {
            match state.clock_entries.get_mut(e.index) {
                Some(entry) if entry.event_type == e.entry_type => entry.timestamp = e.timestamp,
                _ => return state,
            }
            state.last_clock_in = state.latest_of(ClockEventType::ClockIn);
            state.last_clock_out = state.latest_of(ClockEventType::ClockOut);
            state
        }
    }
}
