//! Welcome messages for joining members.

use sea_orm::DatabaseConnection;

use crate::{data::guild_config::GuildConfigRepository, error::AppError, service::discord::DiscordApi};

pub struct WelcomeService<'a> {
    db: &'a DatabaseConnection,
    api: &'a dyn DiscordApi,
}

impl<'a> WelcomeService<'a> {
    pub fn new(db: &'a DatabaseConnection, api: &'a dyn DiscordApi) -> Self {
        Self { db, api }
    }

    /// Greets a member who just joined, if the guild has welcome messages configured.
    ///
    /// Read-only with respect to configuration: a guild without a config row, with
    /// welcome messages disabled, without a channel, or whose channel no longer exists as
    /// a text channel of the guild is silently skipped.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member joined
    /// - `member_mention` - Mention substituted for `%MEMBER%`
    ///
    /// # Returns
    /// - `Ok(true)` - Welcome message sent
    /// - `Ok(false)` - Welcome not configured for this guild
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn greet(&self, guild_id: u64, member_mention: &str) -> Result<bool, AppError> {
        let Some(config) = GuildConfigRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
        else {
            tracing::warn!("Guild config not found for member join in guild {}", guild_id);
            return Ok(false);
        };

        let Some(channel_id) = config.welcome_channel_id.filter(|_| config.welcome_enabled) else {
            return Ok(false);
        };

        if !self.api.text_channel_exists(guild_id, channel_id).await? {
            tracing::warn!(
                "Welcome channel {} of guild {} no longer exists",
                channel_id,
                guild_id
            );
            return Ok(false);
        }

        self.api
            .send_message(channel_id, &config.render_welcome(member_mention))
            .await?;

        Ok(true)
    }
}
