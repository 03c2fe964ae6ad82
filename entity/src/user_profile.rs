use sea_orm::entity::prelude::*;

/// Per-member activity counters, keyed by guild and user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub xp: i64,
    pub level: i32,
    pub message_count: i64,
    pub warning_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild_config::Entity",
        from = "Column::GuildId",
        to = "super::guild_config::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuildConfig,
}

impl Related<super::guild_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
