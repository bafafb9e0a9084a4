// Registration command handler.
//
// Responsibilities
// - Check username availability, then run the registration rules.
// - Hash the password and insert the new user with a fresh id.
// - Report a username lost to a concurrent registration as taken.

use crate::modules::accounts::core::password::hash_password;
use crate::modules::accounts::core::user::UserRecord;
use crate::modules::accounts::use_cases::register_user::command::RegisterUser;
use crate::modules::accounts::use_cases::register_user::decide::{
    RegistrationError, decide_registration, normalize_username,
};
use crate::modules::timeclock::core::state::UserTimeState;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::user_store::{UserStore, UserStoreError};
use std::sync::Arc;
use uuid::Uuid;

pub struct RegisterUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterUserHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: RegisterUser) -> Result<UserRecord, ApplicationError> {
        let taken = self
            .store
            .find_by_username(&normalize_username(&command.username))
            .await?
            .is_some();

        let account = decide_registration(&command, taken).map_err(|errors| {
            tracing::warn!(username = %command.username, ?errors, "registration rejected");
            ApplicationError::RegistrationRejected(errors)
        })?;

        let user = UserRecord {
            id: Uuid::now_v7().to_string(),
            username: account.username,
            password_hash: hash_password(&account.password)?,
            role: account.role,
            phone: account.phone,
            time: UserTimeState::new(),
            created_at: command.requested_at,
            updated_at: command.requested_at,
        };

        match self.store.insert(&user).await {
            Ok(()) => {
                tracing::info!(user_id = %user.id, username = %user.username, "user registered");
                Ok(user)
            }
            Err(UserStoreError::Duplicate(_)) => Err(ApplicationError::RegistrationRejected(vec![
                RegistrationError::UsernameTaken,
            ])),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod register_user_handler_tests {
    use super::*;
    use crate::modules::accounts::core::password::verify_password;
    use crate::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
    use crate::tests::fixtures::clock::monday;
    use rstest::{fixture, rstest};

    #[fixture]
    fn command() -> RegisterUser {
        RegisterUser {
            username: "Grace".into(),
            password: "compilers".into(),
            role: None,
            phone: Some("+1 555 0100 200".into()),
            requested_at: monday(9, 0),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_register_a_user(command: RegisterUser) {
        let store = Arc::new(InMemoryUserStore::new());
        let handler = RegisterUserHandler::new(store.clone());
        let user = handler.handle(command).await.expect("registration failed");
        assert_eq!(user.username, "grace");
        assert!(verify_password("compilers", &user.password_hash));
        assert_eq!(user.time, UserTimeState::new());
        let loaded = store.load(&user.id).await.unwrap().unwrap();
        assert_eq!(loaded.version, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_taken_username_regardless_of_case(command: RegisterUser) {
        let handler = RegisterUserHandler::new(Arc::new(InMemoryUserStore::new()));
        handler.handle(command.clone()).await.unwrap();
        let mut again = command;
        again.username = "GRACE".into();
        match handler.handle(again).await {
            Err(ApplicationError::RegistrationRejected(errors)) => {
                assert_eq!(errors, vec![RegistrationError::UsernameTaken]);
            }
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline(command: RegisterUser) {
        let mut store = InMemoryUserStore::new();
        store.toggle_offline();
        let handler = RegisterUserHandler::new(Arc::new(store));
        assert!(matches!(
            handler.handle(command).await,
            Err(ApplicationError::Store(UserStoreError::Backend(_)))
        ));
    }
}
