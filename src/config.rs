//! Environment-sourced application configuration.

use std::num::NonZeroU64;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOCALES_DIR: &str = "locales";

const DEFAULT_POSTGRES_HOST: &str = "localhost";
const DEFAULT_POSTGRES_PORT: u16 = 5433;
const DEFAULT_POSTGRES_USER: &str = "postgres";
const DEFAULT_POSTGRES_PASSWORD: &str = "postgres";
const DEFAULT_POSTGRES_DB: &str = "progandbot";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub struct Config {
    pub discord_bot_token: String,
    pub command_prefix: String,
    pub log_level: String,
    pub database_url: String,
    pub locales_dir: String,

    /// Twitch live notifications, `None` when the poller is disabled.
    pub twitch: Option<TwitchConfig>,
}

/// Credentials and target for the Twitch live-notification poller.
#[derive(Clone, Debug)]
pub struct TwitchConfig {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub notifications_channel_id: u64,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or malformed
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidEnvVar {
                name: "LOG_LEVEL".to_string(),
                value: log_level,
            }
            .into());
        }

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => postgres_url(&lookup)?,
        };

        Ok(Self {
            discord_bot_token,
            command_prefix: lookup("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            log_level,
            database_url,
            locales_dir: lookup("LOCALES_DIR").unwrap_or_else(|| DEFAULT_LOCALES_DIR.to_string()),
            twitch: twitch_config(&lookup)?,
        })
    }
}

/// Builds a Postgres connection URL from the individual `POSTGRES_*` variables.
fn postgres_url<F>(lookup: &F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("POSTGRES_HOST").unwrap_or_else(|| DEFAULT_POSTGRES_HOST.to_string());
    let port = match lookup("POSTGRES_PORT") {
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "POSTGRES_PORT".to_string(),
                value,
            })?,
        None => DEFAULT_POSTGRES_PORT,
    };
    let user = lookup("POSTGRES_USER").unwrap_or_else(|| DEFAULT_POSTGRES_USER.to_string());
    let password =
        lookup("POSTGRES_PASSWORD").unwrap_or_else(|| DEFAULT_POSTGRES_PASSWORD.to_string());
    let db = lookup("POSTGRES_DB").unwrap_or_else(|| DEFAULT_POSTGRES_DB.to_string());

    Ok(format!("postgres://{user}:{password}@{host}:{port}/{db}"))
}

/// Reads the Twitch settings. Unset `TWITCH_CLIENT_ID` disables the poller; once it is
/// set the remaining variables become required.
fn twitch_config<F>(lookup: &F) -> Result<Option<TwitchConfig>, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(client_id) = lookup("TWITCH_CLIENT_ID").filter(|id| !id.is_empty()) else {
        return Ok(None);
    };

    let required = |name: &str| {
        lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    };

    let client_secret = required("TWITCH_CLIENT_SECRET")?;
    let username = required("TWITCH_USERNAME")?;
    let channel = required("NOTIFICATIONS_CHANNEL_ID")?;
    // Discord snowflakes are never zero and serenity's id types panic on it
    let notifications_channel_id = channel
        .parse::<NonZeroU64>()
        .map(NonZeroU64::get)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "NOTIFICATIONS_CHANNEL_ID".to_string(),
            value: channel,
        })?;

    Ok(Some(TwitchConfig {
        client_id,
        client_secret,
        username,
        notifications_channel_id,
    }))
}
