use crate::modules::accounts::core::user::{UserRecord, UserView};
use serde::Serialize;

/// Body returned by every mutation on the current user.
#[derive(Debug, Serialize)]
pub struct UserMutationResponse {
    pub message: &'static str,
    pub user: UserView,
}

impl UserMutationResponse {
    pub fn new(message: &'static str, user: &UserRecord) -> Self {
        Self {
            message,
            user: UserView::from(user),
        }
    }
}
