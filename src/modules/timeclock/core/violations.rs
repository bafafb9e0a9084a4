// Reasons a clock command can be rejected, grouped by the kind of failure.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    /// The action is not valid in the user's current clock state.
    StateConflict,
    /// The request itself is malformed.
    Validation,
    NotFound,
    /// The request is well formed but forbidden by a business rule.
    Policy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Violation {
    #[error("User is already clocked in")]
    AlreadyClockedIn,

    #[error("User is not clocked in")]
    NotClockedIn,

    #[error("Date is required.")]
    MissingDate,

    #[error("At least one of clockIn or clockOut must be provided.")]
    NoFieldsProvided,

    #[error("Invalid date format for date.")]
    InvalidDate,

    #[error("You can only edit today's time entries. Changing the date is not allowed.")]
    EditWindowViolation,

    #[error("Clock In time must be before Clock Out time.")]
    OrderingViolation,

    #[error("No time entries exist for today. Cannot update.")]
    NoEntriesForDay,

    #[error("No clockIn entry exists for today to update.")]
    MissingClockInEntry,

    #[error("No clockOut entry exists for today to update.")]
    MissingClockOutEntry,

    #[error("No valid updates provided.")]
    NoUpdatesApplied,
}

impl Violation {
    pub fn category(&self) -> ViolationCategory {
        match self {
            Violation::AlreadyClockedIn | Violation::NotClockedIn => {
                ViolationCategory::StateConflict
            }
            Violation::MissingDate
            | Violation::NoFieldsProvided
            | Violation::InvalidDate
            | Violation::OrderingViolation
            | Violation::NoUpdatesApplied => ViolationCategory::Validation,
            Violation::NoEntriesForDay
            | Violation::MissingClockInEntry
            | Violation::MissingClockOutEntry => ViolationCategory::NotFound,
            Violation::EditWindowViolation => ViolationCategory::Policy,
        }
    }

    /// Stable machine-readable identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::AlreadyClockedIn => "ALREADY_CLOCKED_IN",
            Violation::NotClockedIn => "NOT_CLOCKED_IN",
            Violation::MissingDate => "MISSING_DATE",
            Violation::NoFieldsProvided => "NO_FIELDS_PROVIDED",
            Violation::InvalidDate => "INVALID_DATE",
            Violation::EditWindowViolation => "EDIT_WINDOW_VIOLATION",
            Violation::OrderingViolation => "ORDERING_VIOLATION",
            Violation::NoEntriesForDay => "NO_ENTRIES_FOR_DAY",
            Violation::MissingClockInEntry => "MISSING_CLOCK_IN_ENTRY",
            Violation::MissingClockOutEntry => "MISSING_CLOCK_OUT_ENTRY",
            Violation::NoUpdatesApplied => "NO_UPDATES_APPLIED",
        }
    }
}

pub fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
