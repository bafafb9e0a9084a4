use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;

use crate::modules::accounts::adapters::inbound::auth::AuthenticatedUser;
use crate::modules::timeclock::use_cases::record_clock_in::command::RecordClockIn;
use crate::shared::inbound::api_error::ApiError;
use crate::shared::inbound::responses::UserMutationResponse;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let command = RecordClockIn { at: Utc::now() };
    let user = state.timeclock.clock_in(&caller.user_id, command).await?;
    Ok(Json(UserMutationResponse::new("Clocked in successfully", &user)))
}
