// Pure decision function for clocking out.
//
// Rules
// - Only a user who is clocked in can clock out.

use crate::modules::timeclock::core::decision::Decision;
use crate::modules::timeclock::core::events::TimeclockEvent;
use crate::modules::timeclock::core::events::v1::clocked_out::ClockedOutV1;
use crate::modules::timeclock::core::state::UserTimeState;
use crate::modules::timeclock::core::violations::Violation;
use crate::modules::timeclock::use_cases::record_clock_out::command::RecordClockOut;

pub fn decide_clock_out(state: &UserTimeState, command: RecordClockOut) -> Decision {
    if !state.clocked_in {
        return Decision::rejected(Violation::NotClockedIn);
    }
    Decision::accepted(TimeclockEvent::ClockedOutV1(ClockedOutV1 { at: command.at }))
}

#[cfg(test)]
mod record_clock_out_decide_tests {
    use super::*;
    use crate::modules::timeclock::core::clock_event::ClockEvent;
    use crate::modules::timeclock::core::evolve::evolve;
    use crate::modules::timeclock::use_cases::record_clock_in::command::RecordClockIn;
    use crate::modules::timeclock::use_cases::record_clock_in::decide::decide_clock_in;
    use crate::tests::fixtures::clock::{monday, state_from};
    use rstest::rstest;

    #[rstest]
    fn it_should_reject_a_clock_out_without_a_clock_in() {
        let decision = decide_clock_out(&UserTimeState::new(), RecordClockOut { at: monday(17, 0) });
        assert_eq!(decision, Decision::rejected(Violation::NotClockedIn));
    }

    #[rstest]
    fn it_should_reject_a_second_clock_out() {
        let state = state_from(&[
            ClockEvent::clock_in(monday(9, 0)),
            ClockEvent::clock_out(monday(17, 0)),
        ]);
        let decision = decide_clock_out(&state, RecordClockOut { at: monday(18, 0) });
        assert_eq!(decision, Decision::rejected(Violation::NotClockedIn));
    }

    #[rstest]
    fn it_should_decide_to_clock_out() {
        let state = state_from(&[ClockEvent::clock_in(monday(9, 0))]);
        let decision = decide_clock_out(&state, RecordClockOut { at: monday(17, 0) });
        assert_eq!(
            decision,
            Decision::accepted(TimeclockEvent::ClockedOutV1(ClockedOutV1 { at: monday(17, 0) }))
        );
    }

    #[derive(Debug, Clone, Copy)]
    enum Action {
        In,
        Out,
    }

    // Accepted actions are folded, rejected ones are dropped, mirroring the handler.
    #[rstest]
    #[case::alternating(vec![Action::In, Action::Out, Action::In, Action::Out])]
    #[case::double_in(vec![Action::In, Action::In, Action::Out])]
    #[case::out_first(vec![Action::Out, Action::In])]
    #[case::ends_clocked_in(vec![Action::In, Action::Out, Action::Out, Action::In, Action::In])]
    #[case::empty(vec![])]
    fn it_should_keep_the_flag_in_lockstep_with_the_log(#[case] actions: Vec<Action>) {
        let mut state = UserTimeState::new();
        for (minute, action) in (0u32..).zip(actions) {
            let at = monday(9, minute);
            let decision = match action {
                Action::In => decide_clock_in(&state, RecordClockIn { at }),
                Action::Out => decide_clock_out(&state, RecordClockOut { at }),
            };
            if let Decision::Accepted { events } = decision {
                state = events.into_iter().fold(state, evolve);
            }
            assert!(state.is_consistent());
            assert_eq!(state.clocked_in, state.clocked_in_by_log());
        }
    }
}
