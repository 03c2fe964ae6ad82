//! User profile factory for creating test member counters.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user profiles.
///
/// The guild config row referenced by `guild_id` must already exist.
pub struct UserProfileFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    message_count: i64,
    warning_count: i64,
}

impl<'a> UserProfileFactory<'a> {
    /// Creates a new factory for a unique user in the given guild with zeroed counters.
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: next_id().to_string(),
            message_count: 0,
            warning_count: 0,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn message_count(mut self, count: i64) -> Self {
        self.message_count = count;
        self
    }

    pub fn warning_count(mut self, count: i64) -> Self {
        self.warning_count = count;
        self
    }

    /// Builds and inserts the user profile row.
    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        entity::user_profile::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(0),
            message_count: ActiveValue::Set(self.message_count),
            warning_count: ActiveValue::Set(self.warning_count),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user profile with zeroed counters in the given guild.
pub async fn create_user_profile(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::user_profile::Model, DbErr> {
    UserProfileFactory::new(db, guild_id).build().await
}
