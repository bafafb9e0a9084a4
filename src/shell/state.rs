use crate::modules::accounts::core::token::TokenIssuer;
use crate::modules::accounts::use_cases::authenticate::handler::LoginHandler;
use crate::modules::accounts::use_cases::register_user::handler::RegisterUserHandler;
use crate::modules::accounts::use_cases::view_users::handler::ViewUsersHandler;
use crate::modules::timeclock::application::handler::TimeclockHandler;
use crate::modules::timeclock::core::calendar::DayBoundary;
use crate::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenIssuer>,
    pub users: Arc<ViewUsersHandler<InMemoryUserStore>>,
    pub timeclock: Arc<TimeclockHandler<InMemoryUserStore>>,
    pub register_handler: Arc<RegisterUserHandler<InMemoryUserStore>>,
    pub login_handler: Arc<LoginHandler<InMemoryUserStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryUserStore>, tokens: TokenIssuer, calendar: DayBoundary) -> Self {
        let tokens = Arc::new(tokens);
        Self {
            users: Arc::new(ViewUsersHandler::new(store.clone())),
            timeclock: Arc::new(TimeclockHandler::new(store.clone(), calendar)),
            register_handler: Arc::new(RegisterUserHandler::new(store.clone())),
            login_handler: Arc::new(LoginHandler::new(store, tokens.clone())),
            tokens,
        }
    }
}
