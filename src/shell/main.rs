use anyhow::Context as _;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

use timeclock::modules::accounts::core::token::TokenIssuer;
use timeclock::shared::infrastructure::user_store::in_memory::InMemoryUserStore;
use timeclock::shell::config::Settings;
use timeclock::shell::http::router;
use timeclock::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let settings = Settings::load().context("failed to load settings")?;
    let calendar = settings.day_boundary()?;

    // In-memory store for now
    let store = Arc::new(InMemoryUserStore::new());
    let tokens = TokenIssuer::new(&settings.jwt_secret, settings.token_ttl());
    let state = AppState::new(store, tokens, calendar);

    let cors = CorsLayer::new()
        .allow_origin(
            settings
                .cors_origin
                .parse::<HeaderValue>()
                .context("invalid cors_origin")?,
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = router(state).layer(cors);

    let address = settings.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!("REST API: http://{}/api", address);
    tracing::info!("GraphQL endpoint: http://{}/gql", address);
    axum::serve(listener, app).await?;
    Ok(())
}
