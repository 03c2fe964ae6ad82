use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_guild_config_table::GuildConfig;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .add_column(string_len(GuildConfig::Language, 8).default("en"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(GuildConfig::Table)
                    .drop_column(GuildConfig::Language)
                    .to_owned(),
            )
            .await
    }
}
