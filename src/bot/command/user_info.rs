use serenity::all::{Colour, CreateEmbed, Mentionable, User};

use super::{require_guild, send_reply, Context};
use crate::{
    data::user_profile::UserProfileRepository, error::AppError, model::reply::CommandReply,
};

/// Show a member's profile in this server
#[poise::command(slash_command, guild_only)]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "Member to look up (defaults to you)"] user: Option<User>,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let user = user.as_ref().unwrap_or_else(|| ctx.author());

    let Some(profile) = UserProfileRepository::new(&ctx.data().db)
        .find(guild_id, user.id.get())
        .await?
    else {
        return send_reply(
            ctx,
            CommandReply::private(format!("No profile found for {}.", user.mention())),
        )
        .await;
    };

    let signup_date = chrono::DateTime::from_timestamp(user.created_at().unix_timestamp(), 0)
        .map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let embed = CreateEmbed::new()
        .title("User Information")
        .colour(Colour::BLUE)
        .thumbnail(user.face())
        .field("ID", user.id.to_string(), true)
        .field("Signup Date", signup_date, true)
        .field("Username", &user.name, true)
        .field("Warnings", profile.warning_count.to_string(), true)
        .field("Messages", profile.message_count.to_string(), true);

    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
