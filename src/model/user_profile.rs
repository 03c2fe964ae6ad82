use sea_orm::DbErr;

use crate::util::parse::parse_u64_from_string;

/// Activity counters for one member of one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub guild_id: u64,
    pub user_id: u64,
    pub xp: i64,
    pub level: i32,
    pub message_count: i64,
    pub warning_count: i64,
}

impl UserProfile {
    /// Converts an entity model to the domain model at the repository boundary.
    pub fn from_entity(entity: entity::user_profile::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            user_id: parse_u64_from_string(&entity.user_id)?,
            xp: entity.xp,
            level: entity.level,
            message_count: entity.message_count,
            warning_count: entity.warning_count,
        })
    }
}
