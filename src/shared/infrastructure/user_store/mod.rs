// Persistence port for user records.
//
// Responsibilities
// - Load a user together with its version, the unit of optimistic concurrency.
// - Save a user only when the caller saw the latest version.
//
// Boundaries
// - Usernames are unique. The store enforces it on insert.
// - No query language. Lookups are by id or username, listing returns everything.

use crate::modules::accounts::core::user::UserRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("username already taken: {0}")]
    Duplicate(String),

    #[error("no user with id {0}")]
    Missing(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedUser {
    pub user: UserRecord,
    pub version: i64,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn load(&self, id: &str) -> Result<Option<LoadedUser>, UserStoreError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<LoadedUser>, UserStoreError>;
    async fn list(&self) -> Result<Vec<UserRecord>, UserStoreError>;
    async fn insert(&self, user: &UserRecord) -> Result<(), UserStoreError>;
    async fn save(&self, expected_version: i64, user: &UserRecord) -> Result<i64, UserStoreError>;
}

pub mod in_memory;
