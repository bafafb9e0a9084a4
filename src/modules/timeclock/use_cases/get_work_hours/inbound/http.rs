use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;

use crate::modules::accounts::adapters::inbound::auth::{AdminUser, AuthenticatedUser};
use crate::shared::inbound::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn current(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.timeclock.work_hours(&caller.user_id, Utc::now()).await?;
    Ok(Json(summary))
}

pub async fn for_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.timeclock.work_hours(&user_id, Utc::now()).await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod get_work_hours_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use chrono::{Days, Duration, Utc};

    use super::{current, for_user};
    use crate::modules::timeclock::core::clock_event::ClockEvent;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{bearer, get_request, make_test_state, send};
    use crate::tests::fixtures::users::{UserRecordBuilder, seed};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/work-hours", get(current))
            .route("/users/{id}/work-hours", get(for_user))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_summarize_the_callers_log() {
        let (store, state) = make_test_state();
        // a day three weeks back stays in dailyHours but outside both totals
        let day = Utc::now().date_naive() - Days::new(21);
        let start = day.and_hms_opt(9, 0, 0).unwrap().and_utc();
        let user = seed(
            &*store,
            UserRecordBuilder::new()
                .entries(&[
                    ClockEvent::clock_in(start),
                    ClockEvent::clock_out(start + Duration::minutes(90)),
                ])
                .build(),
        )
        .await;
        let auth = bearer(&state, &user);

        let (status, json) = send(app(state), get_request("/work-hours", Some(&auth))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dailyHours"][day.to_string()], 1.5);
        assert_eq!(json["weekTotal"], 0.0);
        assert_eq!(json["biweekTotal"], 0.0);
    }

    #[tokio::test]
    async fn it_should_let_an_admin_read_another_users_hours() {
        let (store, state) = make_test_state();
        let admin = seed(&*store, UserRecordBuilder::new().id("admin").username("boss").admin().build()).await;
        seed(&*store, UserRecordBuilder::new().id("worker").username("worker").build()).await;
        let auth = bearer(&state, &admin);

        let (status, json) = send(app(state), get_request("/users/worker/work-hours", Some(&auth))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["dailyHours"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn it_should_return_403_for_a_regular_user() {
        let (store, state) = make_test_state();
        let user = seed(&*store, UserRecordBuilder::new().id("worker").build()).await;
        let auth = bearer(&state, &user);

        let (status, _) = send(app(state), get_request("/users/worker/work-hours", Some(&auth))).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
