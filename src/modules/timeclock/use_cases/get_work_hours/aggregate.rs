// Work-hours aggregation over a user's clock log.
//
// Rules
// - Entries are grouped by local calendar day and sorted by timestamp inside each day.
// - A day's hours pair its first clock in with its first clock out. A day lacking either
//   counts as zero. Inconsistent data can yield negative hours, which are kept as is.
// - The week starts on the most recent Monday. The biweek adds the seven days before it.
//
// Boundaries
// - Pure. Reads the log and the given instant, never the system clock.

use crate::modules::timeclock::core::calendar::DayBoundary;
use crate::modules::timeclock::core::clock_event::{ClockEvent, ClockEventType};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkHoursSummary {
    pub daily_hours: BTreeMap<NaiveDate, f64>,
    pub week_total: f64,
    pub biweek_total: f64,
}

pub fn summarize_work_hours(
    entries: &[ClockEvent],
    now: DateTime<Utc>,
    calendar: &DayBoundary,
) -> WorkHoursSummary {
    let mut by_day: BTreeMap<NaiveDate, Vec<&ClockEvent>> = BTreeMap::new();
    for entry in entries {
        by_day
            .entry(calendar.day_of(entry.timestamp))
            .or_default()
            .push(entry);
    }

    let daily_hours: BTreeMap<NaiveDate, f64> = by_day
        .into_iter()
        .map(|(day, mut group)| {
            group.sort_by_key(|entry| entry.timestamp);
            (day, hours_for_day(&group))
        })
        .collect();

    let week_start = calendar.week_start(now);
    let week_total = sum_between(&daily_hours, week_start, week_start + Days::new(7));
    let biweek_total =
        week_total + sum_between(&daily_hours, week_start - Days::new(7), week_start);

    WorkHoursSummary {
        daily_hours,
        week_total,
        biweek_total,
    }
}

fn hours_for_day(sorted: &[&ClockEvent]) -> f64 {
    let first = |event_type: ClockEventType| {
        sorted
            .iter()
            .find(|entry| entry.event_type == event_type)
            .map(|entry| entry.timestamp)
    };
    match (first(ClockEventType::ClockIn), first(ClockEventType::ClockOut)) {
        (Some(clock_in), Some(clock_out)) => {
            (clock_out - clock_in).num_milliseconds() as f64 / MILLIS_PER_HOUR
        }
        _ => 0.0,
    }
}

fn sum_between(daily_hours: &BTreeMap<NaiveDate, f64>, from: NaiveDate, until: NaiveDate) -> f64 {
    daily_hours.range(from..until).map(|(_, hours)| hours).sum()
}
