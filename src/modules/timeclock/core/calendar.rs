// Calendar-day reference used by the edit window and the work-hours aggregator.
//
// The "local" day is defined by one fixed UTC offset configured for the deployment, so both
// rules agree on where a day starts.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, Offset, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    offset: FixedOffset,
}

impl Default for DayBoundary {
    fn default() -> Self {
        Self::utc()
    }
}

impl DayBoundary {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// `None` when the offset is a day or more away from UTC.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }

    /// The most recent Monday (today included) in the local reference.
    pub fn week_start(&self, now: DateTime<Utc>) -> NaiveDate {
        let today = self.day_of(now);
        today - Days::new(u64::from(today.weekday().num_days_from_monday()))
    }

    /// Accepts `YYYY-MM-DD` or an RFC 3339 instant. An instant is mapped onto its local day.
    pub fn parse_day(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|instant| self.day_of(instant.with_timezone(&Utc)))
        })
    }
}
