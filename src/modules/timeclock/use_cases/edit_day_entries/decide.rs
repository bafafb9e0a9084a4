// Pure decision functions for editing a day's clock entries.
//
// Rules
// - Checks that apply to the same request are collected and reported together.
// - The target day must parse before it is compared with today.
// - Replacement timestamps must fall on the target day.
// - A missing date ends validation before the ordering check.
// - Only today's entries can be edited, and only by overwriting the timestamp of the first
//   entry of each type for that day. Entries are never created or removed here.

use crate::modules::timeclock::core::calendar::DayBoundary;
use crate::modules::timeclock::core::clock_event::ClockEventType;
use crate::modules::timeclock::core::decision::Decision;
use crate::modules::timeclock::core::events::TimeclockEvent;
use crate::modules::timeclock::core::events::v1::clock_entry_retimed::ClockEntryRetimedV1;
use crate::modules::timeclock::core::state::UserTimeState;
use crate::modules::timeclock::core::violations::Violation;
use crate::modules::timeclock::use_cases::edit_day_entries::command::{
    EditDayEntries, ValidatedEdit,
};

/// Checks that only need the request and the current instant.
pub fn validate_edit(
    command: &EditDayEntries,
    calendar: &DayBoundary,
) -> Result<ValidatedEdit, Vec<Violation>> {
    let mut violations = Vec::new();

    let raw_date = command
        .date
        .as_deref()
        .map(str::trim)
        .filter(|raw| !raw.is_empty());
    if raw_date.is_none() {
        violations.push(Violation::MissingDate);
    }
    if command.clock_in.is_none() && command.clock_out.is_none() {
        violations.push(Violation::NoFieldsProvided);
    }
    let Some(raw_date) = raw_date else {
        return Err(violations);
    };
    if !violations.is_empty() {
        return Err(violations);
    }

    let day = calendar.parse_day(raw_date);
    match day {
        None => violations.push(Violation::InvalidDate),
        Some(day)
            if day != calendar.day_of(command.requested_at)
                || [command.clock_in, command.clock_out]
                    .into_iter()
                    .flatten()
                    .any(|at| calendar.day_of(at) != day) =>
        {
            violations.push(Violation::EditWindowViolation)
        }
        Some(_) => {}
    }
    if matches!(
        (command.clock_in, command.clock_out),
        (Some(clock_in), Some(clock_out)) if clock_in >= clock_out
    ) {
        violations.push(Violation::OrderingViolation);
    }

    match day {
        Some(day) if violations.is_empty() => Ok(ValidatedEdit {
            day,
            clock_in: command.clock_in,
            clock_out: command.clock_out,
        }),
        _ => Err(violations),
    }
}

/// Checks against the user's log, producing one retime per changed entry.
pub fn decide_edit(state: &UserTimeState, edit: &ValidatedEdit, calendar: &DayBoundary) -> Decision {
    let day_entries: Vec<_> = state
        .clock_entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| calendar.day_of(entry.timestamp) == edit.day)
        .collect();
    if day_entries.is_empty() {
        return Decision::rejected(Violation::NoEntriesForDay);
    }

    let requested = [
        (ClockEventType::ClockIn, edit.clock_in, Violation::MissingClockInEntry),
        (ClockEventType::ClockOut, edit.clock_out, Violation::MissingClockOutEntry),
    ];
    let mut violations = Vec::new();
    let mut events = Vec::new();
    for (entry_type, timestamp, missing) in requested {
        let Some(timestamp) = timestamp else {
            continue;
        };
        match day_entries.iter().find(|(_, entry)| entry.event_type == entry_type) {
            None => violations.push(missing),
            Some((index, entry)) if entry.timestamp != timestamp => {
                events.push(TimeclockEvent::ClockEntryRetimedV1(ClockEntryRetimedV1 {
                    index: *index,
                    entry_type,
                    previous: entry.timestamp,
                    timestamp,
                }))
            }
            Some(_) => {}
        }
    }

    if !violations.is_empty() {
        Decision::Rejected {
            reasons: violations,
        }
    } else if events.is_empty() {
        Decision::rejected(Violation::NoUpdatesApplied)
    } else {
        Decision::Accepted { events }
    }
}

/// Runs both phases for callers that already hold the state.
#[cfg(test)]
pub fn decide_edit_day_entries(
    state: &UserTimeState,
    command: &EditDayEntries,
    calendar: &DayBoundary,
) -> Decision {
    match validate_edit(command, calendar) {
        Ok(edit) => decide_edit(state, &edit, calendar),
        Err(reasons) => Decision::Rejected { reasons },
    }
}
