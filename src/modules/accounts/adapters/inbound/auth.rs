//! Bearer-token extractors.

use crate::modules::accounts::core::token::TokenIssuer;
use crate::modules::accounts::core::user::Role;
use crate::shared::inbound::api_error::ApiError;
use crate::shell::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

/// Caller identity taken from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    pub role: Role,
}

/// Like `AuthenticatedUser`, but only admins get through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUser(pub AuthenticatedUser);

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub fn authenticate(headers: &HeaderMap, tokens: &TokenIssuer) -> Result<AuthenticatedUser, ApiError> {
    let token = bearer_token(headers)
        .ok_or_else(|| ApiError::Unauthorized("Not authorized, no token".into()))?;
    let claims = tokens
        .verify(token)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;
    Ok(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
        role: claims.role,
    })
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.tokens)
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let user = authenticate(&parts.headers, &state.tokens)?;
        if !user.role.is_admin() {
            return Err(ApiError::Forbidden("Admin access required".into()));
        }
        Ok(AdminUser(user))
    }
}
