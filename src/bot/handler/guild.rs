//! Guild availability handler.
//!
//! `guild_create` fires for every guild on startup, when the bot joins a guild, and when a
//! guild recovers from an outage. Each occurrence ensures the guild has a configuration
//! row, which also covers guilds joined while the bot was offline.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::data::guild_config::GuildConfigRepository;

pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    match GuildConfigRepository::new(db).create_if_missing(guild_id).await {
        Ok(true) => {
            tracing::info!("Created default config for guild {} ({})", guild.name, guild_id);
        }
        Ok(false) => {
            tracing::debug!("Guild {} ({}) already configured", guild.name, guild_id);
        }
        Err(e) => {
            tracing::error!("Failed to bootstrap config for guild {}: {:?}", guild_id, e);
        }
    }
}
