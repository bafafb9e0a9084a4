use crate::modules::accounts::core::password::hash_password;
use crate::modules::accounts::core::user::{Role, UserRecord};
use crate::modules::timeclock::core::clock_event::ClockEvent;
use crate::modules::timeclock::core::state::UserTimeState;
use crate::shared::infrastructure::user_store::UserStore;
use crate::tests::fixtures::clock::{on, state_from};
use chrono::{DateTime, Utc};

pub struct UserRecordBuilder {
    id: String,
    username: String,
    password_hash: String,
    role: Role,
    phone: Option<String>,
    time: UserTimeState,
    created_at: DateTime<Utc>,
}

impl UserRecordBuilder {
    pub fn new() -> Self {
        Self {
            id: "user-0001".into(),
            username: "tester".into(),
            password_hash: "not-a-real-hash".into(),
            role: Role::User,
            phone: None,
            time: UserTimeState::new(),
            created_at: on(2026, 1, 5, 8, 0),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.into();
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.username = username.into();
        self
    }

    /// Stores a real argon2 hash so the user can log in.
    pub fn password(mut self, password: &str) -> Self {
        self.password_hash = hash_password(password).expect("hash fixture password");
        self
    }

    pub fn admin(mut self) -> Self {
        self.role = Role::Admin;
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn entries(mut self, entries: &[ClockEvent]) -> Self {
        self.time = state_from(entries);
        self
    }

    pub fn clocked_in_at(self, at: DateTime<Utc>) -> Self {
        self.entries(&[ClockEvent::clock_in(at)])
    }

    pub fn build(self) -> UserRecord {
        UserRecord {
            id: self.id,
            username: self.username,
            password_hash: self.password_hash,
            role: self.role,
            phone: self.phone,
            time: self.time,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub async fn seed<TStore: UserStore>(store: &TStore, user: UserRecord) -> UserRecord {
    store.insert(&user).await.expect("seed user");
    user
}
