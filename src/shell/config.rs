// Runtime settings, layered: defaults, then an optional `timeclock.toml`, then
// `TIMECLOCK_*` environment variables.

use crate::modules::timeclock::core::calendar::DayBoundary;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,
    /// Offset of the reference time zone that decides what "today" means.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_token_ttl_minutes() -> i64 {
    120
}

fn default_cors_origin() -> String {
    "http://localhost:3000".into()
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("timeclock").required(false))
                .add_source(Environment::with_prefix("TIMECLOCK").try_parsing(true)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        if settings.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Message("jwt_secret must not be empty".into()));
        }
        if settings.token_ttl_minutes <= 0 {
            return Err(ConfigError::Message("token_ttl_minutes must be positive".into()));
        }
        settings.day_boundary()?;
        Ok(settings)
    }

    pub fn day_boundary(&self) -> Result<DayBoundary, ConfigError> {
        DayBoundary::from_offset_minutes(self.utc_offset_minutes).ok_or_else(|| {
            ConfigError::Message(format!(
                "utc_offset_minutes out of range: {}",
                self.utc_offset_minutes
            ))
        })
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_ttl_minutes)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
