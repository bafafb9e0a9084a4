// Errors surfaced by command and query handlers.

use crate::modules::accounts::core::password::PasswordError;
use crate::modules::accounts::core::token::TokenError;
use crate::modules::accounts::use_cases::register_user::decide::RegistrationError;
use crate::modules::timeclock::core::violations::{Violation, join_messages};
use crate::shared::infrastructure::user_store::UserStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] UserStoreError),

    #[error("User not found")]
    UserNotFound(String),

    #[error("{}", join_messages(.0))]
    Rejected(Vec<Violation>),

    #[error("{}", join_registration(.0))]
    RegistrationRejected(Vec<RegistrationError>),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Password(#[from] PasswordError),
}

fn join_registration(errors: &[RegistrationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
