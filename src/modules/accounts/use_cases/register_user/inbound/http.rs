use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::accounts::use_cases::register_user::command::RegisterUser;
use crate::shared::inbound::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterUserBody {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserResponse {
    pub message: &'static str,
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RegisterUserBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let command = RegisterUser {
        username: body.username,
        password: body.password,
        role: body.role,
        phone: body.phone,
        requested_at: Utc::now(),
    };

    let user = state.register_handler.handle(command).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterUserResponse {
            message: "User created successfully",
            user_id: user.id,
        }),
    ))
}

#[cfg(test)]
mod register_user_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::post};

    use super::handle;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::{json_request, make_offline_state, make_test_state, send};

    fn app(state: AppState) -> Router {
        Router::new().route("/register", post(handle)).with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_201_with_user_id_on_valid_request() {
        let (_, state) = make_test_state();
        let body = r#"{"username":"ada","password":"analytical","phone":"+44 20 7946 0958"}"#;

        let (status, json) = send(app(state), json_request("POST", "/register", None, body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "User created successfully");
        assert!(json["userId"].is_string());
    }

    #[tokio::test]
    async fn it_should_return_400_with_every_problem() {
        let (_, state) = make_test_state();
        let body = r#"{"username":"al","password":"short"}"#;

        let (status, json) = send(app(state), json_request("POST", "/register", None, body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "Username must be between 3 and 20 characters Password must be at least 8 characters long"
        );
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_taken_username() {
        let (_, state) = make_test_state();
        let body = r#"{"username":"ada","password":"analytical"}"#;
        send(app(state.clone()), json_request("POST", "/register", None, body)).await;

        let (status, json) = send(app(state), json_request("POST", "/register", None, body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Username already exists");
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let (_, state) = make_test_state();
        let (status, _) = send(app(state), json_request("POST", "/register", None, "{\"username\":1}")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let body = r#"{"username":"ada","password":"analytical"}"#;
        let (status, _) = send(app(make_offline_state()), json_request("POST", "/register", None, body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
