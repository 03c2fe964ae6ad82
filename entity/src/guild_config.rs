use sea_orm::entity::prelude::*;

/// Per-guild bot configuration, one row per Discord guild.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub welcome_enabled: bool,
    pub welcome_channel_id: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(2000))")]
    pub welcome_message: String,
    pub polls_channel_id: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(2000))")]
    pub polls_message: String,
    pub language: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_profile::Entity")]
    UserProfile,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
