use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::modules::accounts::core::user::Role;
use crate::modules::accounts::use_cases::authenticate::command::Login;
use crate::shared::inbound::api_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct VerifyTokenBody {
    pub token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenResponse {
    pub message: &'static str,
    pub user_id: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;

    let outcome = state
        .login_handler
        .handle(Login {
            username: body.username,
            password: body.password,
            requested_at: Utc::now(),
        })
        .await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        username: outcome.user.username,
        role: outcome.user.role,
    }))
}

pub async fn verify_token(
    State(state): State<AppState>,
    body: Result<Json<VerifyTokenBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;
    let token = body
        .token
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| ApiError::Unauthorized("No token provided".into()))?;

    let claims = state.login_handler.verify(&token)?;
    Ok(Json(VerifyTokenResponse {
        message: "Token is valid",
        user_id: claims.sub,
    }))
}

/// Tokens are stateless, so there is nothing to revoke.
pub async fn logout() -> impl IntoResponse {
    Json(json!({ "message": "Logged out successfully" }))
}
