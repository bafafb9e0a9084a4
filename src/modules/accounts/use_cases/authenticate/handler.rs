// Login handler. Exchanges a username and password for a bearer token.
//
// Rules
// - An unknown username and a wrong password fail the same way.

use crate::modules::accounts::core::password::verify_password;
use crate::modules::accounts::core::token::{Claims, TokenIssuer};
use crate::modules::accounts::core::user::UserRecord;
use crate::modules::accounts::use_cases::authenticate::command::Login;
use crate::modules::accounts::use_cases::register_user::decide::normalize_username;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::user_store::UserStore;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: UserRecord,
}

pub struct LoginHandler<TStore>
where
    TStore: UserStore + 'static,
{
    store: Arc<TStore>,
    tokens: Arc<TokenIssuer>,
}

impl<TStore> LoginHandler<TStore>
where
    TStore: UserStore + 'static,
{
    pub fn new(store: Arc<TStore>, tokens: Arc<TokenIssuer>) -> Self {
        Self { store, tokens }
    }

    pub async fn handle(&self, command: Login) -> Result<LoginOutcome, ApplicationError> {
        let username = normalize_username(&command.username);
        let Some(loaded) = self.store.find_by_username(&username).await? else {
            tracing::warn!(%username, "login for unknown user");
            return Err(ApplicationError::InvalidCredentials);
        };
        if !verify_password(&command.password, &loaded.user.password_hash) {
            tracing::warn!(%username, "login with wrong password");
            return Err(ApplicationError::InvalidCredentials);
        }
        let token = self.tokens.issue(&loaded.user, command.requested_at)?;
        tracing::info!(user_id = %loaded.user.id, "user logged in");
        Ok(LoginOutcome {
            token,
            user: loaded.user,
        })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, ApplicationError> {
        Ok(self.tokens.verify(token)?)
    }
}

#[cfg(test)]
mod login_handler_tests {
    use super::*;
    use crate::modules::accounts::core::token::TokenError;
    use crate::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
    use crate::tests::fixtures::users::{UserRecordBuilder, seed};
    use chrono::{Duration, Utc};
    use rstest::rstest;

    async fn handler_with_ada() -> LoginHandler<InMemoryUserStore> {
        let store = Arc::new(InMemoryUserStore::new());
        seed(
            &*store,
            UserRecordBuilder::new().id("u-ada").username("ada").password("analytical").build(),
        )
        .await;
        let tokens = Arc::new(TokenIssuer::new("login-test-secret", Duration::minutes(120)));
        LoginHandler::new(store, tokens)
    }

    fn login(username: &str, password: &str) -> Login {
        Login {
            username: username.into(),
            password: password.into(),
            requested_at: Utc::now(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_issue_a_token_for_valid_credentials() {
        let handler = handler_with_ada().await;
        let outcome = handler.handle(login("Ada", "analytical")).await.unwrap();
        let claims = handler.verify(&outcome.token).unwrap();
        assert_eq!(claims.sub, "u-ada");
        assert_eq!(outcome.user.username, "ada");
    }

    #[rstest]
    #[case("ada", "wrong-password")]
    #[case("nobody", "analytical")]
    #[tokio::test]
    async fn it_should_not_reveal_which_credential_was_wrong(
        #[case] username: &str,
        #[case] password: &str,
    ) {
        let handler = handler_with_ada().await;
        assert!(matches!(
            handler.handle(login(username, password)).await,
            Err(ApplicationError::InvalidCredentials)
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_tampered_token() {
        let handler = handler_with_ada().await;
        let outcome = handler.handle(login("ada", "analytical")).await.unwrap();
        let tampered = format!("{}x", outcome.token);
        assert!(matches!(
            handler.verify(&tampered),
            Err(ApplicationError::Token(TokenError::Invalid))
        ));
    }
}
