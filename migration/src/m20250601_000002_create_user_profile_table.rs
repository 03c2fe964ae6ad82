use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_guild_config_table::GuildConfig;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(string(UserProfile::GuildId))
                    .col(string(UserProfile::UserId))
                    .col(big_integer(UserProfile::Xp).default(0))
                    .col(integer(UserProfile::Level).default(0))
                    .col(big_integer(UserProfile::MessageCount).default(0))
                    .col(big_integer(UserProfile::WarningCount).default(0))
                    .primary_key(
                        Index::create()
                            .col(UserProfile::GuildId)
                            .col(UserProfile::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_guild_id")
                            .from(UserProfile::Table, UserProfile::GuildId)
                            .to(GuildConfig::Table, GuildConfig::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    GuildId,
    UserId,
    Xp,
    Level,
    MessageCount,
    WarningCount,
}
