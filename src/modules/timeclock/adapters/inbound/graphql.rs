use async_graphql::{Context, Error, ErrorExtensions, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::accounts::adapters::inbound::auth::AuthenticatedUser;
use crate::modules::accounts::core::user::UserRecord;
use crate::modules::timeclock::core::clock_event::{ClockEvent, ClockEventType};
use crate::modules::timeclock::use_cases::edit_day_entries::command::EditDayEntries;
use crate::modules::timeclock::use_cases::get_work_hours::aggregate::WorkHoursSummary;
use crate::modules::timeclock::use_cases::record_clock_in::command::RecordClockIn;
use crate::modules::timeclock::use_cases::record_clock_out::command::RecordClockOut;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlClockEntry {
    #[graphql(name = "type")]
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(SimpleObject)]
pub struct GqlUser {
    pub id: String,
    pub username: String,
    pub role: String,
    pub phone: Option<String>,
    pub clocked_in: bool,
    pub last_clock_in: Option<DateTime<Utc>>,
    pub last_clock_out: Option<DateTime<Utc>>,
    pub clock_entries: Vec<GqlClockEntry>,
}

#[derive(SimpleObject)]
pub struct GqlDailyHours {
    pub date: NaiveDate,
    pub hours: f64,
}

#[derive(SimpleObject)]
pub struct GqlWorkHours {
    pub daily_hours: Vec<GqlDailyHours>,
    pub week_total: f64,
    pub biweek_total: f64,
}

impl From<&ClockEvent> for GqlClockEntry {
    fn from(entry: &ClockEvent) -> Self {
        let event_type = match entry.event_type {
            ClockEventType::ClockIn => "clockIn",
            ClockEventType::ClockOut => "clockOut",
        };
        Self {
            event_type: event_type.to_string(),
            timestamp: entry.timestamp,
        }
    }
}

impl From<UserRecord> for GqlUser {
    fn from(user: UserRecord) -> Self {
        Self {
            clock_entries: user.time.clock_entries.iter().map(GqlClockEntry::from).collect(),
            id: user.id,
            username: user.username,
            role: user.role.as_str().to_string(),
            phone: user.phone,
            clocked_in: user.time.clocked_in,
            last_clock_in: user.time.last_clock_in,
            last_clock_out: user.time.last_clock_out,
        }
    }
}

impl From<WorkHoursSummary> for GqlWorkHours {
    fn from(summary: WorkHoursSummary) -> Self {
        Self {
            daily_hours: summary
                .daily_hours
                .into_iter()
                .map(|(date, hours)| GqlDailyHours { date, hours })
                .collect(),
            week_total: summary.week_total,
            biweek_total: summary.biweek_total,
        }
    }
}

fn caller<'a>(context: &'a Context<'_>) -> GqlResult<&'a AuthenticatedUser> {
    context
        .data_opt::<AuthenticatedUser>()
        .ok_or_else(|| {
            Error::new("Not authorized, no token")
                .extend_with(|_, e| e.set("code", "UNAUTHENTICATED"))
        })
}

fn to_gql_error(error: ApplicationError) -> Error {
    match &error {
        ApplicationError::Rejected(violations) => {
            let codes: Vec<String> = violations.iter().map(|v| v.code().to_string()).collect();
            Error::new(error.to_string()).extend_with(|_, e| e.set("violations", codes))
        }
        ApplicationError::Store(_) | ApplicationError::Password(_) => {
            tracing::error!(error = %error, "graphql request failed");
            Error::new("Internal server error")
        }
        _ => Error::new(error.to_string()),
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn current_user(&self, context: &Context<'_>) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller(context)?;
        let user = state.users.get(&caller.user_id).await.map_err(to_gql_error)?;
        Ok(user.into())
    }

    async fn work_hours(&self, context: &Context<'_>) -> GqlResult<GqlWorkHours> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller(context)?;
        let summary = state
            .timeclock
            .work_hours(&caller.user_id, Utc::now())
            .await
            .map_err(to_gql_error)?;
        Ok(summary.into())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn clock_in(&self, context: &Context<'_>) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller(context)?;
        let user = state
            .timeclock
            .clock_in(&caller.user_id, RecordClockIn { at: Utc::now() })
            .await
            .map_err(to_gql_error)?;
        Ok(user.into())
    }

    async fn clock_out(&self, context: &Context<'_>) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller(context)?;
        let user = state
            .timeclock
            .clock_out(&caller.user_id, RecordClockOut { at: Utc::now() })
            .await
            .map_err(to_gql_error)?;
        Ok(user.into())
    }

    async fn edit_day_entries(
        &self,
        context: &Context<'_>,
        date: Option<String>,
        clock_in: Option<DateTime<Utc>>,
        clock_out: Option<DateTime<Utc>>,
    ) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let caller = caller(context)?;
        let command = EditDayEntries {
            date,
            clock_in,
            clock_out,
            requested_at: Utc::now(),
        };
        let user = state
            .timeclock
            .edit_day_entries(&caller.user_id, command)
            .await
            .map_err(to_gql_error)?;
        Ok(user.into())
    }
}
