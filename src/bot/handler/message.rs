use sea_orm::{DatabaseConnection, DbErr};
use serenity::all::{Context, Message};

use crate::{data::user_profile::UserProfileRepository, model::user_profile::UserProfile};

/// Counts messages sent by members in guild channels
pub async fn handle_message(db: &DatabaseConnection, _ctx: Context, message: Message) {
    let guild_id = message.guild_id.map(|id| id.get());

    if let Err(e) = track_message(
        db,
        guild_id,
        message.author.id.get(),
        message.author.bot,
    )
    .await
    {
        tracing::error!(
            "Failed to increment message count for user {} in guild {:?}: {:?}",
            message.author.id,
            guild_id,
            e
        );
    }
}

/// Increments the author's message count unless the author is a bot or the message is a DM.
///
/// # Returns
/// - `Ok(Some(UserProfile))` - The updated profile
/// - `Ok(None)` - Message was ignored
/// - `Err(DbErr)` - Database error during the upsert
async fn track_message(
    db: &DatabaseConnection,
    guild_id: Option<u64>,
    author_id: u64,
    author_is_bot: bool,
) -> Result<Option<UserProfile>, DbErr> {
    if author_is_bot {
        return Ok(None);
    }

    // Only track messages in guild channels (not DMs)
    let Some(guild_id) = guild_id else {
        return Ok(None);
    };

    UserProfileRepository::new(db)
        .increment_message_count(guild_id, author_id)
        .await
        .map(Some)
}
