//! `/settings` command tree for server administrators.

use serenity::all::GuildChannel;

use super::{require_guild, send_reply, Context};
use crate::{error::AppError, service::settings::SettingsService};

/// Configure the bot for this server
#[poise::command(
    slash_command,
    guild_only,
    default_member_permissions = "ADMINISTRATOR",
    subcommands("show", "language", "welcome", "polls"),
    subcommand_required
)]
pub async fn settings(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Show the current settings for this server
#[poise::command(slash_command, guild_only)]
async fn show(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let data = ctx.data();

    let reply = SettingsService::new(&data.db, &data.translator)
        .overview(guild_id)
        .await?;

    send_reply(ctx, reply).await
}

/// Set the bot language for this server
#[poise::command(slash_command, guild_only)]
async fn language(
    ctx: Context<'_>,
    #[description = "Language code (en, es)"] language: String,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let data = ctx.data();

    let reply = SettingsService::new(&data.db, &data.translator)
        .set_language(guild_id, &language)
        .await?;

    send_reply(ctx, reply).await
}

/// Configure welcome messages
#[poise::command(
    slash_command,
    guild_only,
    subcommands("welcome_enabled", "welcome_channel", "welcome_message"),
    subcommand_required
)]
async fn welcome(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Enable or disable welcome messages
#[poise::command(slash_command, guild_only, rename = "enabled")]
async fn welcome_enabled(
    ctx: Context<'_>,
    #[description = "Whether new members are welcomed"] enabled: bool,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let data = ctx.data();

    let reply = SettingsService::new(&data.db, &data.translator)
        .set_welcome_enabled(guild_id, enabled)
        .await?;

    send_reply(ctx, reply).await
}

/// Set the channel where new members are welcomed
#[poise::command(slash_command, guild_only, rename = "channel")]
async fn welcome_channel(
    ctx: Context<'_>,
    #[description = "Text channel for welcome messages"]
    #[channel_types("Text", "News")]
    channel: GuildChannel,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let data = ctx.data();

    let reply = SettingsService::new(&data.db, &data.translator)
        .set_welcome_channel(guild_id, &channel)
        .await?;

    send_reply(ctx, reply).await
}

/// Set the welcome message; %MEMBER% is replaced by the new member
#[poise::command(slash_command, guild_only, rename = "message")]
async fn welcome_message(
    ctx: Context<'_>,
    #[description = "Welcome message text"] message: String,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let data = ctx.data();

    let reply = SettingsService::new(&data.db, &data.translator)
        .set_welcome_message(guild_id, message)
        .await?;

    send_reply(ctx, reply).await
}

/// Configure polls
#[poise::command(
    slash_command,
    guild_only,
    subcommands("polls_channel", "polls_message"),
    subcommand_required
)]
async fn polls(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Set the channel where polls are posted
#[poise::command(slash_command, guild_only, rename = "channel")]
async fn polls_channel(
    ctx: Context<'_>,
    #[description = "Text channel for polls"]
    #[channel_types("Text", "News")]
    channel: GuildChannel,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let data = ctx.data();

    let reply = SettingsService::new(&data.db, &data.translator)
        .set_polls_channel(guild_id, &channel)
        .await?;

    send_reply(ctx, reply).await
}

/// Set the message posted together with every poll
#[poise::command(slash_command, guild_only, rename = "message")]
async fn polls_message(
    ctx: Context<'_>,
    #[description = "Poll announcement text"] message: String,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let data = ctx.data();

    let reply = SettingsService::new(&data.db, &data.translator)
        .set_polls_message(guild_id, message)
        .await?;

    send_reply(ctx, reply).await
}
