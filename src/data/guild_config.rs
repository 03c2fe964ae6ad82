//! Guild configuration repository.
//!
//! Provides the read-or-create access used by every settings command and event handler.
//! Read paths (`find_by_guild_id`) never create rows; writes (`create_if_missing`,
//! `get_or_create`, `update`) insert a row at the documented defaults when none exists.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait};

use crate::model::guild_config::{
    GuildConfig, GuildConfigUpdate, Language, DEFAULT_POLLS_MESSAGE, DEFAULT_WELCOME_MESSAGE,
};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    /// Creates a new GuildConfigRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration of a guild without creating it.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Guild has a configuration row
    /// - `Ok(None)` - Guild was never configured
    /// - `Err(DbErr)` - Database error or corrupt stored snowflake
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfig>, DbErr> {
        entity::prelude::GuildConfig::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(GuildConfig::from_entity)
            .transpose()
    }

    /// Inserts a default configuration row unless the guild already has one.
    ///
    /// Used by the guild bootstrap event. Existing rows are left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - A new row was inserted
    /// - `Ok(false)` - The guild was already configured
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_if_missing(&self, guild_id: u64) -> Result<bool, DbErr> {
        insert_default_if_missing(self.db, guild_id).await
    }

    /// Returns the guild configuration, creating it with defaults first if absent.
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildConfig, DbErr> {
        self.create_if_missing(guild_id).await?;

        self.find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("guild_config {guild_id}")))
    }

    /// Applies a single-field change, creating the row at defaults when absent.
    ///
    /// Runs as one `INSERT .. ON CONFLICT (guild_id) DO UPDATE` statement that only
    /// touches the targeted column of an existing row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `update` - The field to change and its new value
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The configuration after the change
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn update(
        &self,
        guild_id: u64,
        update: GuildConfigUpdate,
    ) -> Result<GuildConfig, DbErr> {
        let mut model = default_active_model(guild_id);

        let column = match update {
            GuildConfigUpdate::WelcomeEnabled(enabled) => {
                model.welcome_enabled = ActiveValue::Set(enabled);
                entity::guild_config::Column::WelcomeEnabled
            }
            GuildConfigUpdate::WelcomeChannel(channel_id) => {
                model.welcome_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
                entity::guild_config::Column::WelcomeChannelId
            }
            GuildConfigUpdate::WelcomeMessage(message) => {
                model.welcome_message = ActiveValue::Set(message);
                entity::guild_config::Column::WelcomeMessage
            }
            GuildConfigUpdate::PollsChannel(channel_id) => {
                model.polls_channel_id = ActiveValue::Set(Some(channel_id.to_string()));
                entity::guild_config::Column::PollsChannelId
            }
            GuildConfigUpdate::PollsMessage(message) => {
                model.polls_message = ActiveValue::Set(message);
                entity::guild_config::Column::PollsMessage
            }
            GuildConfigUpdate::Language(language) => {
                model.language = ActiveValue::Set(language.code().to_string());
                entity::guild_config::Column::Language
            }
        };

        let entity = entity::prelude::GuildConfig::insert(model)
            .on_conflict(
                OnConflict::column(entity::guild_config::Column::GuildId)
                    .update_column(column)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        GuildConfig::from_entity(entity)
    }
}

/// Active model for a guild at the documented defaults.
fn default_active_model(guild_id: u64) -> entity::guild_config::ActiveModel {
    entity::guild_config::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        welcome_enabled: ActiveValue::Set(false),
        welcome_channel_id: ActiveValue::Set(None),
        welcome_message: ActiveValue::Set(DEFAULT_WELCOME_MESSAGE.to_string()),
        polls_channel_id: ActiveValue::Set(None),
        polls_message: ActiveValue::Set(DEFAULT_POLLS_MESSAGE.to_string()),
        language: ActiveValue::Set(Language::default().code().to_string()),
    }
}

/// Inserts the default row for `guild_id` on any connection or transaction.
pub(crate) async fn insert_default_if_missing<C>(db: &C, guild_id: u64) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let inserted = entity::prelude::GuildConfig::insert(default_active_model(guild_id))
        .on_conflict(
            OnConflict::column(entity::guild_config::Column::GuildId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(inserted == 1)
}
