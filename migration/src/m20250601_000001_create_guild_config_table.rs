use sea_orm_migration::{prelude::*, schema::*};

const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome %MEMBER% to the server! Enjoy your stay! If you have any questions, feel free to ask.";
const DEFAULT_POLLS_MESSAGE: &str = "A new poll has been created! @everyone";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(string(GuildConfig::GuildId).primary_key())
                    .col(boolean(GuildConfig::WelcomeEnabled).default(false))
                    .col(string_null(GuildConfig::WelcomeChannelId))
                    .col(
                        string_len(GuildConfig::WelcomeMessage, 2000)
                            .default(DEFAULT_WELCOME_MESSAGE),
                    )
                    .col(string_null(GuildConfig::PollsChannelId))
                    .col(string_len(GuildConfig::PollsMessage, 2000).default(DEFAULT_POLLS_MESSAGE))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guild_config_welcome_channel_id")
                    .table(GuildConfig::Table)
                    .col(GuildConfig::WelcomeChannelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guild_config_polls_channel_id")
                    .table(GuildConfig::Table)
                    .col(GuildConfig::PollsChannelId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    GuildId,
    WelcomeEnabled,
    WelcomeChannelId,
    WelcomeMessage,
    PollsChannelId,
    PollsMessage,
    Language,
}
