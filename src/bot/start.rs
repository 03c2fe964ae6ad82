use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::{
    bot::{framework::framework, handler::Handler},
    config::Config,
    error::AppError,
    i18n::Translator,
};

/// Builds the Discord client without connecting.
///
/// The caller starts the client, which lets it grab the shared `Http` client and shard
/// manager for the poller and the shutdown handler first.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and command prefix
/// - `db` - Database connection shared by commands and event handlers
/// - `translator` - Localized reply tables
/// - `ready` - Notified on every gateway ready event
///
/// # Returns
/// - `Ok(Client)` - Client ready to `start()`
/// - `Err(AppError)` - Invalid token or client build failure
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    translator: Arc<Translator>,
    ready: Arc<Notify>,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(db.clone(), ready);
    let framework = framework(config.command_prefix.clone(), db, translator);

    let client = Client::builder(&config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(handler)
        .await?;

    Ok(client)
}
