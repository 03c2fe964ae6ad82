use serenity::all::{Mentionable, User};

use super::{discord_api, require_guild, send_reply, Context};
use crate::{
    error::AppError,
    service::moderation::{ModerationRequest, ModerationService},
};

fn moderation_request(
    ctx: Context<'_>,
    guild_id: u64,
    target: &User,
    reason: Option<String>,
) -> ModerationRequest {
    let moderator = ctx.author();

    ModerationRequest {
        guild_id,
        channel_id: ctx.channel_id().get(),
        moderator_id: moderator.id.get(),
        moderator_mention: moderator.mention().to_string(),
        moderator_avatar_url: moderator.face(),
        target_id: target.id.get(),
        target_mention: target.mention().to_string(),
        target_avatar_url: target.face(),
        reason,
    }
}

/// Kick a member from the server
#[poise::command(slash_command, guild_only, default_member_permissions = "KICK_MEMBERS")]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "Member to kick"]
    #[rename = "member"]
    target: User,
    #[description = "Reason for the kick"] reason: Option<String>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let request = moderation_request(ctx, guild_id, &target, reason);
    let api = discord_api(ctx);

    let reply = ModerationService::new(&ctx.data().db, &api)
        .kick(&request)
        .await?;

    send_reply(ctx, reply).await
}

/// Ban a member from the server
#[poise::command(slash_command, guild_only, default_member_permissions = "BAN_MEMBERS")]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "Member to ban"]
    #[rename = "member"]
    target: User,
    #[description = "Reason for the ban"] reason: Option<String>,
    #[description = "Delete the member's messages from the last 7 days"] clear_messages: Option<bool>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let request = moderation_request(ctx, guild_id, &target, reason);
    let api = discord_api(ctx);

    let reply = ModerationService::new(&ctx.data().db, &api)
        .ban(&request, clear_messages.unwrap_or(false))
        .await?;

    send_reply(ctx, reply).await
}

/// Warn a member
#[poise::command(slash_command, guild_only, default_member_permissions = "KICK_MEMBERS")]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "Member to warn"]
    #[rename = "member"]
    target: User,
    #[description = "Reason for the warning"] reason: Option<String>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let request = moderation_request(ctx, guild_id, &target, reason);
    let api = discord_api(ctx);

    let reply = ModerationService::new(&ctx.data().db, &api)
        .warn(&request)
        .await?;

    send_reply(ctx, reply).await
}

/// Delete recent messages from this channel
#[poise::command(slash_command, guild_only, default_member_permissions = "MANAGE_MESSAGES")]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Number of messages to delete (1-100)"] amount: Option<i64>,
) -> Result<(), AppError> {
    require_guild(ctx)?;
    let api = discord_api(ctx);

    // Deleting can take a while for old messages
    ctx.defer_ephemeral().await?;

    let reply = ModerationService::new(&ctx.data().db, &api)
        .clear(ctx.channel_id().get(), amount.unwrap_or(10))
        .await?;

    send_reply(ctx, reply).await
}
