//! Moderation commands: kick, ban, warn and clear.
//!
//! Each action validates its input, performs the Discord action, and only then posts the
//! moderation embed in the invoking channel. Permission failures become a single
//! ephemeral "I do not have permission" reply; nothing is retried.

use sea_orm::DatabaseConnection;

use crate::{
    data::user_profile::UserProfileRepository,
    error::AppError,
    model::{
        notice::{ModerationAction, ModerationNotice},
        reply::CommandReply,
    },
    service::discord::DiscordApi,
};

/// Discord's audit log reason limit.
pub const MAX_REASON_LENGTH: usize = 512;

pub const DEFAULT_REASON: &str = "Unspecified reason";

/// Days of message history deleted when a ban clears messages.
pub const BAN_DELETE_MESSAGE_DAYS: u8 = 7;

pub const MAX_CLEAR_AMOUNT: i64 = 100;

/// Who is acting on whom, and where the command was invoked.
#[derive(Debug, Clone)]
pub struct ModerationRequest {
    pub guild_id: u64,
    pub channel_id: u64,
    pub moderator_id: u64,
    pub moderator_mention: String,
    pub moderator_avatar_url: String,
    pub target_id: u64,
    pub target_mention: String,
    pub target_avatar_url: String,
    pub reason: Option<String>,
}

impl ModerationRequest {
    fn notice(&self, action: ModerationAction, reason: String) -> ModerationNotice {
        ModerationNotice {
            action,
            target_mention: self.target_mention.clone(),
            target_avatar_url: self.target_avatar_url.clone(),
            moderator_mention: self.moderator_mention.clone(),
            moderator_avatar_url: self.moderator_avatar_url.clone(),
            reason,
        }
    }
}

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
    api: &'a dyn DiscordApi,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection, api: &'a dyn DiscordApi) -> Self {
        Self { db, api }
    }

    /// Kicks the target member.
    ///
    /// # Returns
    /// - `Ok(CommandReply)` - Public success reply, or the ephemeral permission failure
    /// - `Err(AppError::Validation)` - Self-target or reason too long
    /// - `Err(AppError)` - Any other Discord failure
    pub async fn kick(&self, request: &ModerationRequest) -> Result<CommandReply, AppError> {
        let reason = validate(request, ModerationAction::Kick)?;

        let result = self
            .api
            .kick(request.guild_id, request.target_id, &reason)
            .await;

        self.complete(request, ModerationAction::Kick, reason, result)
            .await
    }

    /// Bans the target member, optionally deleting a week of their messages.
    pub async fn ban(
        &self,
        request: &ModerationRequest,
        clear_messages: bool,
    ) -> Result<CommandReply, AppError> {
        let reason = validate(request, ModerationAction::Ban)?;
        let delete_message_days = if clear_messages {
            BAN_DELETE_MESSAGE_DAYS
        } else {
            0
        };

        let result = self
            .api
            .ban(request.guild_id, request.target_id, delete_message_days, &reason)
            .await;

        self.complete(request, ModerationAction::Ban, reason, result)
            .await
    }

    /// Records a warning for the target member and announces it.
    ///
    /// The counter is committed first, so an announcement failure still reports the
    /// warning as recorded.
    pub async fn warn(&self, request: &ModerationRequest) -> Result<CommandReply, AppError> {
        let reason = validate(request, ModerationAction::Warn)?;

        let profile = UserProfileRepository::new(self.db)
            .increment_warning_count(request.guild_id, request.target_id)
            .await?;

        tracing::info!(
            "Warned user {} in guild {} ({} warnings)",
            request.target_id,
            request.guild_id,
            profile.warning_count
        );

        let notice = request.notice(ModerationAction::Warn, reason);
        match self.api.announce_moderation(request.channel_id, &notice).await {
            Ok(()) => Ok(CommandReply::public(format!(
                "Successfully warned {}.",
                request.target_mention
            ))),
            Err(AppError::Forbidden) => Ok(CommandReply::failure(format!(
                "Warning recorded for {}, but I do not have permission to announce it in this channel.",
                request.target_mention
            ))),
            Err(e) => {
                tracing::error!("Failed to announce warning: {:?}", e);

                Ok(CommandReply::failure(format!(
                    "Warning recorded for {}, but the announcement could not be sent.",
                    request.target_mention
                )))
            }
        }
    }

    /// Deletes the most recent `amount` messages of a channel.
    ///
    /// `amount` is checked against 1..=100 before any Discord call.
    pub async fn clear(&self, channel_id: u64, amount: i64) -> Result<CommandReply, AppError> {
        let limit = u8::try_from(amount)
            .ok()
            .filter(|limit| (1..=MAX_CLEAR_AMOUNT).contains(&i64::from(*limit)))
            .ok_or_else(|| {
                AppError::Validation("You must specify a number between 1 and 100.".to_string())
            })?;

        match self.api.purge(channel_id, limit).await {
            Ok(deleted) => {
                tracing::info!("Cleared {} messages from channel {}", deleted, channel_id);
                Ok(CommandReply::private(format!(
                    "Successfully cleared {deleted} messages from the channel."
                )))
            }
            Err(AppError::Forbidden) => Ok(CommandReply::failure(
                "I do not have permission to clear messages in this channel.",
            )),
            Err(e) => Err(e),
        }
    }

    /// Turns the action result into the reply, announcing successful actions.
    async fn complete(
        &self,
        request: &ModerationRequest,
        action: ModerationAction,
        reason: String,
        result: Result<(), AppError>,
    ) -> Result<CommandReply, AppError> {
        match result {
            Ok(()) => {}
            Err(AppError::Forbidden) => return Ok(permission_denied(action)),
            Err(e) => return Err(e),
        }

        tracing::info!(
            "User {} {} {} in guild {}",
            request.moderator_id,
            past_tense(action),
            request.target_id,
            request.guild_id
        );

        // The action already happened, a missing announcement is not reported to the user
        let notice = request.notice(action, reason);
        if let Err(e) = self.api.announce_moderation(request.channel_id, &notice).await {
            tracing::error!(
                "Failed to announce {} in channel {}: {:?}",
                action.verb(),
                request.channel_id,
                e
            );
        }

        Ok(CommandReply::public(format!(
            "Successfully {} {} from the server.",
            past_tense(action),
            request.target_mention
        )))
    }
}

fn past_tense(action: ModerationAction) -> &'static str {
    match action {
        ModerationAction::Kick => "kicked",
        ModerationAction::Ban => "banned",
        ModerationAction::Warn => "warned",
    }
}

fn permission_denied(action: ModerationAction) -> CommandReply {
    CommandReply::failure(format!(
        "I do not have permission to {} this member.",
        action.verb()
    ))
}

/// Rejects self-targeting and over-long reasons, returning the effective reason.
fn validate(request: &ModerationRequest, action: ModerationAction) -> Result<String, AppError> {
    if request.target_id == request.moderator_id {
        return Err(AppError::Validation(format!(
            "You cannot {} yourself!",
            action.verb()
        )));
    }

    let reason = request
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|reason| !reason.is_empty())
        .unwrap_or(DEFAULT_REASON);

    if reason.chars().count() > MAX_REASON_LENGTH {
        return Err(AppError::Validation(format!(
            "The reason is too long. Please limit it to {MAX_REASON_LENGTH} characters."
        )));
    }

    Ok(reason.to_string())
}
