use crate::modules::timeclock::core::events::TimeclockEvent;
use crate::modules::timeclock::core::violations::Violation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<TimeclockEvent> },
    Rejected { reasons: Vec<Violation> },
}

impl Decision {
    pub fn accepted(event: TimeclockEvent) -> Self {
        Decision::Accepted {
            events: vec![event],
        }
    }

    pub fn rejected(reason: Violation) -> Self {
        Decision::Rejected {
            reasons: vec![reason],
        }
    }
}
