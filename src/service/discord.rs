//! Outbound Discord operations.
//!
//! `DiscordApi` is the seam between services and the Discord REST API. The production
//! implementation wraps serenity's shared `Http` client; tests use a recording fake.

use async_trait::async_trait;
use chrono::Utc;
use serenity::{
    all::{
        Channel, ChannelId, ChannelType, Colour, CreateEmbed, CreateEmbedFooter, CreateMessage,
        CreatePoll, CreatePollAnswer, GetMessages, GuildId, MessageId, PollMediaEmoji, Timestamp,
        UserId,
    },
    http::{Http, HttpError},
};
use std::{future::Future, sync::Arc, time::Duration};

use crate::{
    error::AppError,
    model::notice::{LiveNotice, ModerationNotice, PollDraft},
};

/// Messages older than this cannot be bulk deleted.
const BULK_DELETE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60;

const TWITCH_LOGO_GIF: &str = "https://media.tenor.com/0yuiqR9nENMAAAAM/twitch-logo.gif";

/// Discord actions performed by services.
///
/// Permission failures are reported as `AppError::Forbidden` so callers can turn them into
/// an "insufficient permission" reply.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Sends a plain text message to a channel.
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError>;

    /// Returns whether `channel_id` is a text channel belonging to `guild_id`.
    async fn text_channel_exists(&self, guild_id: u64, channel_id: u64)
        -> Result<bool, AppError>;

    /// Posts the moderation embed for a completed action.
    async fn announce_moderation(
        &self,
        channel_id: u64,
        notice: &ModerationNotice,
    ) -> Result<(), AppError>;

    /// Posts the stream-went-live announcement.
    async fn send_live_notification(
        &self,
        channel_id: u64,
        notice: &LiveNotice,
    ) -> Result<(), AppError>;

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError>;

    /// Bans a member, deleting `delete_message_days` days of their message history.
    async fn ban(
        &self,
        guild_id: u64,
        user_id: u64,
        delete_message_days: u8,
        reason: &str,
    ) -> Result<(), AppError>;

    /// Deletes up to `limit` of the most recent messages in a channel.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of messages deleted
    async fn purge(&self, channel_id: u64, limit: u8) -> Result<usize, AppError>;

    /// Posts `content` together with a native poll.
    async fn create_poll(
        &self,
        channel_id: u64,
        content: &str,
        poll: &PollDraft,
    ) -> Result<(), AppError>;
}

/// `DiscordApi` backed by serenity's REST client.
#[derive(Clone)]
pub struct SerenityDiscordApi {
    http: Arc<Http>,
}

impl SerenityDiscordApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

fn is_not_found(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

#[async_trait]
impl DiscordApi for SerenityDiscordApi {
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id).say(&self.http, content).await?;

        Ok(())
    }

    async fn text_channel_exists(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<bool, AppError> {
        match ChannelId::new(channel_id).to_channel(&self.http).await {
            Ok(Channel::Guild(channel)) => Ok(channel.guild_id.get() == guild_id
                && matches!(channel.kind, ChannelType::Text | ChannelType::News)),
            Ok(_) => Ok(false),
            Err(e) if is_not_found(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn announce_moderation(
        &self,
        channel_id: u64,
        notice: &ModerationNotice,
    ) -> Result<(), AppError> {
        let action = notice.action;

        let mut embed = CreateEmbed::new()
            .title(action.title())
            .description(action.description(&notice.target_mention))
            .colour(Colour::RED)
            .timestamp(Timestamp::now())
            .thumbnail(&notice.target_avatar_url)
            .footer(
                CreateEmbedFooter::new("ProgAndBot Moderation")
                    .icon_url(&notice.moderator_avatar_url),
            )
            .field(action.moderator_field(), &notice.moderator_mention, true)
            .field("Reason", &notice.reason, true);

        if let Some(image) = action.image_url() {
            embed = embed.image(image);
        }

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }

    async fn send_live_notification(
        &self,
        channel_id: u64,
        notice: &LiveNotice,
    ) -> Result<(), AppError> {
        let stream_url = notice.stream_url();

        let content = format!(
            "**¡Ey!** ¡{} está en directo! ¿A qué esperas para ir a verlo? ||@everyone||",
            notice.username
        );

        let embed = CreateEmbed::new()
            .title("¡Nuevo directo en Twitch!")
            .url(&stream_url)
            .description(&notice.title)
            .colour(Colour::PURPLE)
            .timestamp(Timestamp::now())
            .footer(CreateEmbedFooter::new("ProgAndBot Twitch Notifier"))
            .field("Categoría", &notice.category, true)
            .field("Canal de Twitch", &stream_url, true)
            .image(TWITCH_LOGO_GIF);

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content).embed(embed))
            .await?;

        Ok(())
    }

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .kick_with_reason(&self.http, UserId::new(user_id), reason)
            .await?;

        Ok(())
    }

    async fn ban(
        &self,
        guild_id: u64,
        user_id: u64,
        delete_message_days: u8,
        reason: &str,
    ) -> Result<(), AppError> {
        GuildId::new(guild_id)
            .ban_with_reason(&self.http, UserId::new(user_id), delete_message_days, reason)
            .await?;

        Ok(())
    }

    async fn purge(&self, channel_id: u64, limit: u8) -> Result<usize, AppError> {
        let channel_id = ChannelId::new(channel_id);

        let messages = channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        // Discord only bulk deletes messages younger than two weeks
        let cutoff = Utc::now().timestamp() - BULK_DELETE_MAX_AGE_SECS;
        let (recent, old): (Vec<MessageId>, Vec<MessageId>) = {
            let (recent, old): (Vec<_>, Vec<_>) = messages
                .iter()
                .partition(|message| message.timestamp.unix_timestamp() > cutoff);
            (
                recent.into_iter().map(|m| m.id).collect(),
                old.into_iter().map(|m| m.id).collect(),
            )
        };

        match recent.as_slice() {
            [] => {}
            [single] => channel_id.delete_message(&self.http, *single).await?,
            ids => channel_id.delete_messages(&self.http, ids).await?,
        }

        delete_individually(&old, recent.len(), |message_id| async move {
            channel_id
                .delete_message(&self.http, message_id)
                .await
                .map_err(AppError::from)
        })
        .await
    }

    async fn create_poll(
        &self,
        channel_id: u64,
        content: &str,
        poll: &PollDraft,
    ) -> Result<(), AppError> {
        let answers = poll
            .answers
            .iter()
            .map(|(emoji, text)| {
                CreatePollAnswer::new()
                    .text(text)
                    .emoji(PollMediaEmoji::Name(emoji.clone()))
            })
            .collect();

        let mut create_poll = CreatePoll::new()
            .question(&poll.question)
            .answers(answers)
            .duration(Duration::from_secs(u64::from(poll.duration_hours) * 60 * 60));

        if poll.allow_multiple {
            create_poll = create_poll.allow_multiselect();
        }

        ChannelId::new(channel_id)
            .send_message(
                &self.http,
                CreateMessage::new().content(content).poll(create_poll),
            )
            .await?;

        Ok(())
    }
}

/// Deletes messages one at a time after `already_deleted` were removed in bulk.
///
/// A failed delete is logged and skipped so messages that were removed still count. The
/// error is only returned when nothing at all was deleted.
async fn delete_individually<F, Fut>(
    message_ids: &[MessageId],
    already_deleted: usize,
    mut delete: F,
) -> Result<usize, AppError>
where
    F: FnMut(MessageId) -> Fut,
    Fut: Future<Output = Result<(), AppError>>,
{
    let mut deleted = already_deleted;
    let mut last_error = None;

    for message_id in message_ids {
        match delete(*message_id).await {
            Ok(()) => deleted += 1,
            Err(e) => {
                tracing::warn!("Failed to delete message {}: {:?}", message_id, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if deleted == 0 => Err(e),
        _ => Ok(deleted),
    }
}
