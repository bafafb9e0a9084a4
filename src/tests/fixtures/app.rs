use crate::modules::accounts::core::token::TokenIssuer;
use crate::modules::accounts::core::user::UserRecord;
use crate::modules::timeclock::core::calendar::DayBoundary;
use crate::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
use crate::shell::state::AppState;
use axum::{Router, body::Body, http::Request, http::StatusCode};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "timeclock-test-secret";

pub fn make_test_state() -> (Arc<InMemoryUserStore>, AppState) {
    state_over(InMemoryUserStore::new())
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryUserStore::new();
    store.toggle_offline();
    state_over(store).1
}

fn state_over(store: InMemoryUserStore) -> (Arc<InMemoryUserStore>, AppState) {
    let store = Arc::new(store);
    let tokens = TokenIssuer::new(TEST_SECRET, Duration::minutes(120));
    let state = AppState::new(store.clone(), tokens, DayBoundary::utc());
    (store, state)
}

/// `Authorization` header value for `user`.
pub fn bearer(state: &AppState, user: &UserRecord) -> String {
    let token = state.tokens.issue(user, Utc::now()).expect("issue test token");
    format!("Bearer {token}")
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::from(body.to_string())).expect("build request")
}

pub fn get_request(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::empty()).expect("build request")
}

/// Sends one request and decodes the JSON body, `Null` when there is none.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
