use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: String,
    pub password: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub requested_at: DateTime<Utc>,
}
