// Timeclock command handler orchestrates the write flow for one user.
//
// Responsibilities
// - Load the user and its version from the store.
// - Call the decider with the command and the user's clock state.
// - Fold accepted events into the state and save with optimistic concurrency.
// - Answer work-hours queries from the stored log.
//
// Boundaries
// - Edits are validated before the user is loaded, so a malformed request never touches the store.

use crate::modules::accounts::core::user::UserRecord;
use crate::modules::timeclock::core::calendar::DayBoundary;
use crate::modules::timeclock::core::decision::Decision;
use crate::modules::timeclock::core::evolve::evolve;
use crate::modules::timeclock::core::state::UserTimeState;
use crate::modules::timeclock::use_cases::edit_day_entries::command::EditDayEntries;
use crate::modules::timeclock::use_cases::edit_day_entries::decide::{decide_edit, validate_edit};
use crate::modules::timeclock::use_cases::get_work_hours::aggregate::{
    WorkHoursSummary, summarize_work_hours,
};
use crate::modules::timeclock::use_cases::record_clock_in::command::RecordClockIn;
use crate::modules::timeclock::use_cases::record_clock_in::decide::decide_clock_in;
use crate::modules::timeclock::use_cases::record_clock_out::command::RecordClockOut;
use crate::modules::timeclock::use_cases::record_clock_out::decide::decide_clock_out;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::user_store::{LoadedUser, UserStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct TimeclockHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
    calendar: DayBoundary,
}

impl<TStore> TimeclockHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>, calendar: DayBoundary) -> Self {
        Self { store, calendar }
    }

    pub async fn clock_in(
        &self,
        user_id: &str,
        command: RecordClockIn,
    ) -> Result<UserRecord, ApplicationError> {
        let at = command.at;
        self.apply(user_id, at, "clock in", |state| decide_clock_in(state, command))
            .await
    }

    pub async fn clock_out(
        &self,
        user_id: &str,
        command: RecordClockOut,
    ) -> Result<UserRecord, ApplicationError> {
        let at = command.at;
        self.apply(user_id, at, "clock out", |state| decide_clock_out(state, command))
            .await
    }

    pub async fn edit_day_entries(
        &self,
        user_id: &str,
        command: EditDayEntries,
    ) -> Result<UserRecord, ApplicationError> {
        let edit = validate_edit(&command, &self.calendar).map_err(|reasons| {
            tracing::warn!(%user_id, ?reasons, "edit day entries rejected");
            ApplicationError::Rejected(reasons)
        })?;
        self.apply(user_id, command.requested_at, "edit day entries", |state| {
            decide_edit(state, &edit, &self.calendar)
        })
        .await
    }

    pub async fn work_hours(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<WorkHoursSummary, ApplicationError> {
        let loaded = self.load(user_id).await?;
        Ok(summarize_work_hours(
            &loaded.user.time.clock_entries,
            now,
            &self.calendar,
        ))
    }

    async fn load(&self, user_id: &str) -> Result<LoadedUser, ApplicationError> {
        self.store
            .load(user_id)
            .await?
            .ok_or_else(|| ApplicationError::UserNotFound(user_id.to_string()))
    }

    async fn apply(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
        action: &'static str,
        decide: impl FnOnce(&UserTimeState) -> Decision,
    ) -> Result<UserRecord, ApplicationError> {
        let LoadedUser { mut user, version } = self.load(user_id).await?;

        match decide(&user.time) {
            Decision::Accepted { events } => {
                user.time = events.into_iter().fold(user.time, evolve);
                user.updated_at = at;
                self.store.save(version, &user).await?;
                tracing::info!(%user_id, action, "timeclock updated");
                Ok(user)
            }
            Decision::Rejected { reasons } => {
                tracing::warn!(%user_id, action, ?reasons, "timeclock command rejected");
                Err(ApplicationError::Rejected(reasons))
            }
        }
    }
}
