//! `/settings` command logic.
//!
//! Every setter validates its input before touching the database, then applies a single
//! field through `GuildConfigRepository::update`, creating the guild row on first write.
//! Replies are localized in the guild's language.

use sea_orm::DatabaseConnection;
use serenity::all::{ChannelType, GuildChannel};

use crate::{
    data::guild_config::GuildConfigRepository,
    error::AppError,
    i18n::Translator,
    model::{
        guild_config::{GuildConfigUpdate, Language, MAX_MESSAGE_LENGTH},
        reply::CommandReply,
    },
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
    translator: &'a Translator,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, translator: &'a Translator) -> Self {
        Self { db, translator }
    }

    /// Sets the reply language of the guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being configured
    /// - `code` - Language code entered by the administrator
    ///
    /// # Returns
    /// - `Ok(CommandReply)` - Confirmation in the newly selected language
    /// - `Err(AppError::Validation)` - Code is not a supported language
    /// - `Err(AppError::DbErr)` - Failed to persist the change
    pub async fn set_language(&self, guild_id: u64, code: &str) -> Result<CommandReply, AppError> {
        let Some(language) = Language::from_code(code) else {
            let current = self.current_language(guild_id).await?;
            return Err(AppError::Validation(self.translator.translate_with(
                current,
                "settings.invalid_language",
                &[("languages", &Language::supported_codes())],
            )));
        };

        tracing::info!("Setting bot language for guild {} to {}", guild_id, language.code());

        let config = self
            .repo()
            .update(guild_id, GuildConfigUpdate::Language(language))
            .await?;

        Ok(CommandReply::private(self.translator.translate_with(
            config.language,
            "settings.language_set",
            &[("language", language.code())],
        )))
    }

    pub async fn set_welcome_enabled(
        &self,
        guild_id: u64,
        enabled: bool,
    ) -> Result<CommandReply, AppError> {
        tracing::info!("Setting welcome messages for guild {} to {}", guild_id, enabled);

        let config = self
            .repo()
            .update(guild_id, GuildConfigUpdate::WelcomeEnabled(enabled))
            .await?;

        let key = if enabled {
            "welcome.set_enabled"
        } else {
            "welcome.set_disabled"
        };

        Ok(CommandReply::private(
            self.translator.translate(config.language, key),
        ))
    }

    pub async fn set_welcome_channel(
        &self,
        guild_id: u64,
        channel: &GuildChannel,
    ) -> Result<CommandReply, AppError> {
        self.validate_text_channel(guild_id, channel).await?;

        tracing::info!("Setting welcome channel for guild {} to {}", guild_id, channel.id);

        let config = self
            .repo()
            .update(guild_id, GuildConfigUpdate::WelcomeChannel(channel.id.get()))
            .await?;

        Ok(CommandReply::private(self.translator.translate_with(
            config.language,
            "welcome.channel_set",
            &[("channel", &format!("<#{}>", channel.id))],
        )))
    }

    pub async fn set_welcome_message(
        &self,
        guild_id: u64,
        message: String,
    ) -> Result<CommandReply, AppError> {
        self.validate_message(guild_id, &message).await?;

        tracing::info!("Setting welcome message for guild {}", guild_id);

        let config = self
            .repo()
            .update(guild_id, GuildConfigUpdate::WelcomeMessage(message.clone()))
            .await?;

        Ok(CommandReply::private(self.translator.translate_with(
            config.language,
            "welcome.message_set",
            &[("message", &message)],
        )))
    }

    pub async fn set_polls_channel(
        &self,
        guild_id: u64,
        channel: &GuildChannel,
    ) -> Result<CommandReply, AppError> {
        self.validate_text_channel(guild_id, channel).await?;

        tracing::info!("Setting polls channel for guild {} to {}", guild_id, channel.id);

        let config = self
            .repo()
            .update(guild_id, GuildConfigUpdate::PollsChannel(channel.id.get()))
            .await?;

        Ok(CommandReply::private(self.translator.translate_with(
            config.language,
            "polls.channel_set",
            &[("channel", &format!("<#{}>", channel.id))],
        )))
    }

    pub async fn set_polls_message(
        &self,
        guild_id: u64,
        message: String,
    ) -> Result<CommandReply, AppError> {
        self.validate_message(guild_id, &message).await?;

        tracing::info!("Setting polls message for guild {}", guild_id);

        let config = self
            .repo()
            .update(guild_id, GuildConfigUpdate::PollsMessage(message.clone()))
            .await?;

        Ok(CommandReply::private(self.translator.translate_with(
            config.language,
            "polls.message_set",
            &[("message", &message)],
        )))
    }

    /// Shows the guild's current settings, creating the default row on first use.
    pub async fn overview(&self, guild_id: u64) -> Result<CommandReply, AppError> {
        let config = self.repo().get_or_create(guild_id).await?;
        let language = config.language;

        let channel = |channel_id: Option<u64>| {
            channel_id
                .map(|id| format!("<#{id}>"))
                .unwrap_or_else(|| self.translator.translate(language, "settings.not_set"))
        };
        let welcome = if config.welcome_enabled {
            self.translator.translate(language, "settings.enabled")
        } else {
            self.translator.translate(language, "settings.disabled")
        };

        Ok(CommandReply::private(self.translator.translate_with(
            language,
            "settings.overview",
            &[
                ("language", language.code()),
                ("welcome", &welcome),
                ("welcome_channel", &channel(config.welcome_channel_id)),
                ("polls_channel", &channel(config.polls_channel_id)),
            ],
        )))
    }

    fn repo(&self) -> GuildConfigRepository<'a> {
        GuildConfigRepository::new(self.db)
    }

    /// Language for replies sent before any write; never creates the guild row.
    async fn current_language(&self, guild_id: u64) -> Result<Language, AppError> {
        Ok(self
            .repo()
            .find_by_guild_id(guild_id)
            .await?
            .map(|config| config.language)
            .unwrap_or_default())
    }

    /// Rejects empty messages and messages longer than Discord's 2000 character limit.
    async fn validate_message(&self, guild_id: u64, message: &str) -> Result<(), AppError> {
        let key = if message.is_empty() {
            "validation.empty_message"
        } else if message.chars().count() > MAX_MESSAGE_LENGTH {
            "validation.message_too_long"
        } else {
            return Ok(());
        };

        let language = self.current_language(guild_id).await?;

        Err(AppError::Validation(self.translator.translate_with(
            language,
            key,
            &[("max", &MAX_MESSAGE_LENGTH.to_string())],
        )))
    }

    /// Requires a text or announcement channel of the same guild.
    async fn validate_text_channel(
        &self,
        guild_id: u64,
        channel: &GuildChannel,
    ) -> Result<(), AppError> {
        let is_text = matches!(channel.kind, ChannelType::Text | ChannelType::News);
        if is_text && channel.guild_id.get() == guild_id {
            return Ok(());
        }

        let language = self.current_language(guild_id).await?;

        Err(AppError::Validation(
            self.translator
                .translate(language, "validation.invalid_text_channel"),
        ))
    }
}
