use sea_orm::DatabaseConnection;
use serenity::all::{Context, Member, Mentionable};

use crate::service::{discord::SerenityDiscordApi, welcome::WelcomeService};

/// Sends the configured welcome message when a member joins a guild
pub async fn handle_guild_member_addition(db: &DatabaseConnection, ctx: Context, member: Member) {
    let guild_id = member.guild_id.get();
    let api = SerenityDiscordApi::new(ctx.http.clone());

    match WelcomeService::new(db, &api)
        .greet(guild_id, &member.mention().to_string())
        .await
    {
        Ok(true) => {
            tracing::info!("Welcomed user {} in guild {}", member.user.id, guild_id);
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!(
                "Failed to welcome user {} in guild {}: {:?}",
                member.user.id,
                guild_id,
                e
            );
        }
    }
}
