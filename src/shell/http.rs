use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::modules::accounts::use_cases::authenticate::inbound::http as authenticate_http;
use crate::modules::accounts::use_cases::register_user::inbound::http as register_http;
use crate::modules::accounts::use_cases::view_users::inbound::http as users_http;
use crate::modules::timeclock::use_cases::edit_day_entries::inbound::http as edit_http;
use crate::modules::timeclock::use_cases::get_work_hours::inbound::http as work_hours_http;
use crate::modules::timeclock::use_cases::record_clock_in::inbound::http as clock_in_http;
use crate::modules::timeclock::use_cases::record_clock_out::inbound::http as clock_out_http;
use crate::shell::graphql::{self, build_schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    let api = Router::new()
        .route("/auth/register", post(register_http::handle))
        .route("/auth/login", post(authenticate_http::login))
        .route("/auth/verify-token", post(authenticate_http::verify_token))
        .route("/auth/logout", post(authenticate_http::logout))
        .route("/users", get(users_http::list))
        .route("/users/current-user", get(users_http::current))
        .route(
            "/users/current-user/clock-in",
            put(clock_in_http::handle).post(clock_in_http::handle),
        )
        .route(
            "/users/current-user/clock-out",
            put(clock_out_http::handle).post(clock_out_http::handle),
        )
        .route(
            "/users/current-user/time-entries",
            put(edit_http::handle).post(edit_http::handle),
        )
        .route("/users/current-user/work-hours", get(work_hours_http::current))
        .route("/users/{id}", get(users_http::get_one))
        .route("/users/{id}/work-hours", get(work_hours_http::for_user));

    Router::new()
        .nest("/api", api)
        .route("/gql", get(graphql::graphiql).post(graphql::execute))
        .fallback(route_not_found)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Route not found" })))
}
