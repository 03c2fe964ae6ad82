//! Guild config factory for creating test configuration rows.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let config = GuildConfigFactory::new(&db)
///     .guild_id("987654321")
///     .welcome_enabled(true)
///     .welcome_channel_id(Some("555"))
///     .build()
///     .await?;
/// ```
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::guild_config::Model,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new factory with a unique guild ID and default settings.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let mut entity = fixture::guild_config::entity();
        entity.guild_id = next_id().to_string();

        Self { db, entity }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.entity.guild_id = guild_id.into();
        self
    }

    pub fn welcome_enabled(mut self, enabled: bool) -> Self {
        self.entity.welcome_enabled = enabled;
        self
    }

    pub fn welcome_channel_id(mut self, channel_id: Option<impl Into<String>>) -> Self {
        self.entity.welcome_channel_id = channel_id.map(Into::into);
        self
    }

    pub fn welcome_message(mut self, message: impl Into<String>) -> Self {
        self.entity.welcome_message = message.into();
        self
    }

    pub fn polls_channel_id(mut self, channel_id: Option<impl Into<String>>) -> Self {
        self.entity.polls_channel_id = channel_id.map(Into::into);
        self
    }

    pub fn polls_message(mut self, message: impl Into<String>) -> Self {
        self.entity.polls_message = message.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.entity.language = language.into();
        self
    }

    /// Builds and inserts the guild config row.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let entity = self.entity;

        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(entity.guild_id),
            welcome_enabled: ActiveValue::Set(entity.welcome_enabled),
            welcome_channel_id: ActiveValue::Set(entity.welcome_channel_id),
            welcome_message: ActiveValue::Set(entity.welcome_message),
            polls_channel_id: ActiveValue::Set(entity.polls_channel_id),
            polls_message: ActiveValue::Set(entity.polls_message),
            language: ActiveValue::Set(entity.language),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild config with default values.
///
/// Shorthand for `GuildConfigFactory::new(db).build().await`.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}
