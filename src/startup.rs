use std::time::Duration;

use oauth2::{basic::BasicClient, AuthType, ClientId, ClientSecret, TokenUrl};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, TwitchConfig},
    error::AppError,
    service::twitch::{TwitchOAuthClient, TWITCH_TOKEN_URL},
};

/// Installs the global tracing subscriber.
///
/// The configured level applies to this crate; the gateway and database driver crates are
/// capped at `warn` because they log every heartbeat and query.
pub fn setup_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(format!(
        "{log_level},serenity=warn,tungstenite=warn,sqlx=warn"
    ))
    .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the gateway
/// connection starts delivering events.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Upper bound for a single Twitch request, kept well under the poll interval so a stalled
/// connection costs at most one tick.
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the HTTP client used for Twitch requests.
///
/// Redirects are disabled so token and API requests cannot be bounced to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    build_reqwest_client(HTTP_REQUEST_TIMEOUT)
}

fn build_reqwest_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(HTTP_CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for the Twitch client-credentials grant.
///
/// Twitch expects the client id and secret as form fields rather than basic auth.
pub fn setup_twitch_oauth_client(config: &TwitchConfig) -> Result<TwitchOAuthClient, AppError> {
    let token_url = TokenUrl::new(TWITCH_TOKEN_URL.to_string())
        .map_err(|e| AppError::InternalError(format!("Invalid Twitch token URL: {}", e)))?;

    Ok(BasicClient::new(ClientId::new(config.client_id.clone()))
        .set_client_secret(ClientSecret::new(config.client_secret.clone()))
        .set_auth_type(AuthType::RequestBody)
        .set_token_uri(token_url))
}
