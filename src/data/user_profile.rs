//! Member activity counters.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, DatabaseConnection, DbErr, EntityTrait, TransactionTrait,
};

use crate::{data::guild_config::insert_default_if_missing, model::user_profile::UserProfile};

pub struct UserProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a member's profile without creating it.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - Member has activity recorded in the guild
    /// - `Ok(None)` - No profile yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<UserProfile>, DbErr> {
        entity::prelude::UserProfile::find_by_id((guild_id.to_string(), user_id.to_string()))
            .one(self.db)
            .await?
            .map(UserProfile::from_entity)
            .transpose()
    }

    /// Adds one to the member's message counter, creating the profile if needed.
    pub async fn increment_message_count(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<UserProfile, DbErr> {
        self.increment(guild_id, user_id, entity::user_profile::Column::MessageCount)
            .await
    }

    /// Adds one to the member's warning counter, creating the profile if needed.
    pub async fn increment_warning_count(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<UserProfile, DbErr> {
        self.increment(guild_id, user_id, entity::user_profile::Column::WarningCount)
            .await
    }

    /// Upserts the profile row, adding one to `column` in place.
    ///
    /// The parent guild row is ensured in the same transaction so the foreign key holds
    /// for guilds that were never bootstrapped.
    async fn increment(
        &self,
        guild_id: u64,
        user_id: u64,
        column: entity::user_profile::Column,
    ) -> Result<UserProfile, DbErr> {
        let (message_count, warning_count) = match column {
            entity::user_profile::Column::MessageCount => (1, 0),
            _ => (0, 1),
        };

        let txn = self.db.begin().await?;

        insert_default_if_missing(&txn, guild_id).await?;

        let entity = entity::prelude::UserProfile::insert(entity::user_profile::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(0),
            message_count: ActiveValue::Set(message_count),
            warning_count: ActiveValue::Set(warning_count),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_profile::Column::GuildId,
                entity::user_profile::Column::UserId,
            ])
            .value(
                column,
                Expr::col((entity::user_profile::Entity, column)).add(1),
            )
            .to_owned(),
        )
        .exec_with_returning(&txn)
        .await?;

        txn.commit().await?;

        UserProfile::from_entity(entity)
    }
}
