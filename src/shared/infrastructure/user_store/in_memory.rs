// In memory implementation of the UserStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep each user with a version that starts at 1 and grows with every save.
// - Enforce optimistic concurrency by checking the expected version.
// - Simulate an unavailable backend and slow writes for tests.

use crate::modules::accounts::core::user::UserRecord;
use crate::shared::infrastructure::user_store::{LoadedUser, UserStore, UserStoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

const OFFLINE: &str = "User store offline";

#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<String, (i64, UserRecord)>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), UserStoreError> {
        if self.is_offline {
            return Err(UserStoreError::Backend(OFFLINE.into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for InMemoryUserStore {
    async fn load(&self, id: &str) -> Result<Option<LoadedUser>, UserStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.get(id).map(|(version, user)| LoadedUser {
            user: user.clone(),
            version: *version,
        }))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<LoadedUser>, UserStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .values()
            .find(|(_, user)| user.username == username)
            .map(|(version, user)| LoadedUser {
                user: user.clone(),
                version: *version,
            }))
    }

    async fn list(&self) -> Result<Vec<UserRecord>, UserStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let mut users: Vec<UserRecord> = guard.values().map(|(_, user)| user.clone()).collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn insert(&self, user: &UserRecord) -> Result<(), UserStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.values().any(|(_, existing)| existing.username == user.username) {
            return Err(UserStoreError::Duplicate(user.username.clone()));
        }
        if guard.contains_key(&user.id) {
            return Err(UserStoreError::Duplicate(user.id.clone()));
        }
        guard.insert(user.id.clone(), (1, user.clone()));
        Ok(())
    }

    async fn save(&self, expected_version: i64, user: &UserRecord) -> Result<i64, UserStoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let (version, stored) = guard
            .get_mut(&user.id)
            .ok_or_else(|| UserStoreError::Missing(user.id.clone()))?;
        if *version != expected_version {
            return Err(UserStoreError::VersionMismatch {
                expected: expected_version,
                actual: *version,
            });
        }
        *version += 1;
        *stored = user.clone();
        Ok(*version)
    }
}
