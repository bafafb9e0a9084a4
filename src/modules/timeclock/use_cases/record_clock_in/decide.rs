// Pure decision function for clocking in.
//
// Rules
// - A user who is already clocked in cannot clock in again.

use crate::modules::timeclock::core::decision::Decision;
use crate::modules::timeclock::core::events::TimeclockEvent;
use crate::modules::timeclock::core::events::v1::clocked_in::ClockedInV1;
use crate::modules::timeclock::core::state::UserTimeState;
use crate::modules::timeclock::core::violations::Violation;
use crate::modules::timeclock::use_cases::record_clock_in::command::RecordClockIn;

pub fn decide_clock_in(state: &UserTimeState, command: RecordClockIn) -> Decision {
    if state.clocked_in {
        return Decision::rejected(Violation::AlreadyClockedIn);
    }
    Decision::accepted(TimeclockEvent::ClockedInV1(ClockedInV1 { at: command.at }))
}
