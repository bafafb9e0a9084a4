// Pure decision function for registering an account.
//
// Rules
// - Usernames are case-insensitive and stored lowercased, 3 to 20 characters.
// - Passwords need at least 8 characters.
// - A phone number is optional. When given it has an optional leading plus and 7 to 15 digits.
//   Spaces and dashes are ignored.
// - Role defaults to user.
// - Every violation is reported, not just the first.

use crate::modules::accounts::core::user::Role;
use crate::modules::accounts::use_cases::register_user::command::RegisterUser;
use thiserror::Error;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;
const PASSWORD_MIN: usize = 8;
const PHONE_DIGITS_MIN: usize = 7;
const PHONE_DIGITS_MAX: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Username must be between 3 and 20 characters")]
    UsernameLength,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Invalid phone number format")]
    InvalidPhone,

    #[error("Invalid role")]
    InvalidRole,

    #[error("Username already exists")]
    UsernameTaken,
}

/// Registration data that passed every rule. The password is still plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub phone: Option<String>,
}

pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn decide_registration(
    command: &RegisterUser,
    username_taken: bool,
) -> Result<NewAccount, Vec<RegistrationError>> {
    let mut errors = Vec::new();

    let username = normalize_username(&command.username);
    let length = username.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        errors.push(RegistrationError::UsernameLength);
    }
    if command.password.chars().count() < PASSWORD_MIN {
        errors.push(RegistrationError::PasswordTooShort);
    }

    let phone = command
        .phone
        .as_deref()
        .map(str::trim)
        .filter(|phone| !phone.is_empty());
    if phone.is_some_and(|phone| !looks_like_phone(phone)) {
        errors.push(RegistrationError::InvalidPhone);
    }

    let role = match command.role.as_deref() {
        None => Some(Role::User),
        Some(raw) => Role::parse(raw),
    };
    if role.is_none() {
        errors.push(RegistrationError::InvalidRole);
    }

    if username_taken {
        errors.push(RegistrationError::UsernameTaken);
    }

    match role {
        Some(role) if errors.is_empty() => Ok(NewAccount {
            username,
            password: command.password.clone(),
            role,
            phone: phone.map(str::to_string),
        }),
        _ => Err(errors),
    }
}

fn looks_like_phone(raw: &str) -> bool {
    let compact: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();
    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    digits.chars().all(|c| c.is_ascii_digit())
        && (PHONE_DIGITS_MIN..=PHONE_DIGITS_MAX).contains(&digits.len())
}
