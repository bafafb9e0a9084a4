use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::accounts::adapters::inbound::auth::{AdminUser, AuthenticatedUser};
use crate::modules::accounts::core::user::UserView;
use crate::shared::inbound::api_error::ApiError;
use crate::shell::state::AppState;

pub async fn current(
    State(state): State<AppState>,
    caller: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.get(&caller.user_id).await?;
    Ok(Json(UserView::from(&user)))
}

pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<impl IntoResponse, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(users.iter().map(UserView::from).collect::<Vec<_>>()))
}

pub async fn get_one(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.get(&user_id).await?;
    Ok(Json(UserView::from(&user)))
}
