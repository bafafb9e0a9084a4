// HTTP error type shared by every inbound handler.
//
// Body shape: `{ "error": message }`, plus `violations` when a clock command was rejected.

use crate::modules::accounts::core::token::TokenError;
use crate::modules::timeclock::core::violations::{
    Violation, ViolationCategory, join_messages,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::user_store::UserStoreError;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unprocessable(String),
    #[error("{}", join_messages(.0))]
    Rejected(Vec<Violation>),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ViolationBody {
    code: &'static str,
    category: ViolationCategory,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected(violations) => match violations.first().map(Violation::category) {
                Some(ViolationCategory::StateConflict) => StatusCode::CONFLICT,
                Some(ViolationCategory::NotFound) => StatusCode::NOT_FOUND,
                Some(ViolationCategory::Policy) => StatusCode::FORBIDDEN,
                Some(ViolationCategory::Validation) | None => StatusCode::BAD_REQUEST,
            },
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Rejected(violations) => ApiError::Rejected(violations),
            ApplicationError::RegistrationRejected(_) => ApiError::BadRequest(error.to_string()),
            ApplicationError::UserNotFound(_) => ApiError::NotFound(error.to_string()),
            ApplicationError::InvalidCredentials => ApiError::Unauthorized(error.to_string()),
            ApplicationError::Token(TokenError::Encoding(_)) => {
                ApiError::Internal(error.to_string())
            }
            ApplicationError::Token(_) => ApiError::Unauthorized(error.to_string()),
            ApplicationError::Store(UserStoreError::VersionMismatch { .. }) => ApiError::Conflict(
                "The record was changed by another request. Please retry.".into(),
            ),
            ApplicationError::Store(UserStoreError::Duplicate(_)) => {
                ApiError::Conflict(error.to_string())
            }
            ApplicationError::Store(UserStoreError::Missing(_)) => {
                ApiError::NotFound("User not found".into())
            }
            ApplicationError::Store(UserStoreError::Backend(_))
            | ApplicationError::Password(_) => ApiError::Internal(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Rejected(violations) => {
                let details: Vec<ViolationBody> = violations
                    .iter()
                    .map(|violation| ViolationBody {
                        code: violation.code(),
                        category: violation.category(),
                        message: violation.to_string(),
                    })
                    .collect();
                let body = json!({
                    "error": join_messages(&violations),
                    "violations": details,
                });
                (status, Json(body)).into_response()
            }
            ApiError::Unauthorized(message) => {
                let mut response = (status, Json(json!({ "error": message }))).into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (status, Json(json!({ "error": "Internal server error" }))).into_response()
            }
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}
