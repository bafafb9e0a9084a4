// Command data type for correcting the current day's clock entries.
//
// Responsibilities
// - Carry the raw target date as received. Parsing it is part of validation.
// - Carry the replacement timestamps and the instant of the request.

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDayEntries {
    pub date: Option<String>,
    pub clock_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
    pub requested_at: DateTime<Utc>,
}

/// An edit that passed every check that does not need the user's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEdit {
    pub day: NaiveDate,
    pub clock_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
}
