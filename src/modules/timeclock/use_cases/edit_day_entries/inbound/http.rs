use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::accounts::adapters::inbound::auth::AuthenticatedUser;
use crate::modules::timeclock::use_cases::edit_day_entries::command::EditDayEntries;
use crate::shared::inbound::api_error::ApiError;
use crate::shared::inbound::responses::UserMutationResponse;
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDayEntriesBody {
    pub date: Option<String>,
    pub clock_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
}

pub async fn handle(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
    body: Result<Json<EditDayEntriesBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let command = EditDayEntries {
        date: body.date,
        clock_in: body.clock_in,
        clock_out: body.clock_out,
        requested_at: Utc::now(),
    };

    let user = state
        .timeclock
        .edit_day_entries(&caller.user_id, command)
        .await?;
    Ok(Json(UserMutationResponse::new("Time entries updated successfully", &user)))
}
