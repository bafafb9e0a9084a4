// Read side for user profiles.

use crate::modules::accounts::core::user::UserRecord;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::user_store::UserStore;
use std::sync::Arc;

pub struct ViewUsersHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ViewUsersHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, user_id: &str) -> Result<UserRecord, ApplicationError> {
        self.store
            .load(user_id)
            .await?
            .map(|loaded| loaded.user)
            .ok_or_else(|| ApplicationError::UserNotFound(user_id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<UserRecord>, ApplicationError> {
        Ok(self.store.list().await?)
    }
}
