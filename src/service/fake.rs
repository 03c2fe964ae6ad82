//! Recording `DiscordApi` used by service and scheduler tests.

use async_trait::async_trait;
use std::{
    collections::HashSet,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use crate::{
    error::AppError,
    model::notice::{LiveNotice, ModerationNotice, PollDraft},
    service::discord::DiscordApi,
};

/// A Discord call observed by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    SendMessage { channel_id: u64, content: String },
    AnnounceModeration { channel_id: u64, notice: ModerationNotice },
    LiveNotification { channel_id: u64, notice: LiveNotice },
    Kick { guild_id: u64, user_id: u64, reason: String },
    Ban { guild_id: u64, user_id: u64, delete_message_days: u8, reason: String },
    Purge { channel_id: u64, limit: u8 },
    CreatePoll { channel_id: u64, content: String, poll: PollDraft },
}

/// Records every call and answers from configured state.
///
/// `forbidden()` makes every mutating call fail with `AppError::Forbidden`, and
/// `failing_sends()` makes message posts fail with a generic Discord error.
#[derive(Default)]
pub struct RecordingDiscordApi {
    calls: Mutex<Vec<ApiCall>>,
    text_channels: HashSet<(u64, u64)>,
    channel_messages: usize,
    deleted: AtomicUsize,
    forbidden: bool,
    failing_sends: bool,
}

impl RecordingDiscordApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a text channel that `text_channel_exists` reports as present.
    pub fn with_text_channel(mut self, guild_id: u64, channel_id: u64) -> Self {
        self.text_channels.insert((guild_id, channel_id));
        self
    }

    /// Number of messages available for `purge` to delete.
    pub fn with_channel_messages(mut self, count: usize) -> Self {
        self.channel_messages = count;
        self
    }

    pub fn forbidden(mut self) -> Self {
        self.forbidden = true;
        self
    }

    pub fn failing_sends(mut self) -> Self {
        self.failing_sends = true;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Total messages deleted through `purge`.
    pub fn deleted(&self) -> usize {
        self.deleted.load(Ordering::SeqCst)
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome(&self) -> Result<(), AppError> {
        if self.forbidden {
            return Err(AppError::Forbidden);
        }
        if self.failing_sends {
            return Err(AppError::InternalError("send failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DiscordApi for RecordingDiscordApi {
    async fn send_message(&self, channel_id: u64, content: &str) -> Result<(), AppError> {
        self.record(ApiCall::SendMessage {
            channel_id,
            content: content.to_string(),
        });
        self.outcome()
    }

    async fn text_channel_exists(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<bool, AppError> {
        Ok(self.text_channels.contains(&(guild_id, channel_id)))
    }

    async fn announce_moderation(
        &self,
        channel_id: u64,
        notice: &ModerationNotice,
    ) -> Result<(), AppError> {
        self.record(ApiCall::AnnounceModeration {
            channel_id,
            notice: notice.clone(),
        });
        self.outcome()
    }

    async fn send_live_notification(
        &self,
        channel_id: u64,
        notice: &LiveNotice,
    ) -> Result<(), AppError> {
        self.record(ApiCall::LiveNotification {
            channel_id,
            notice: notice.clone(),
        });
        self.outcome()
    }

    async fn kick(&self, guild_id: u64, user_id: u64, reason: &str) -> Result<(), AppError> {
        self.record(ApiCall::Kick {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        self.outcome()
    }

    async fn ban(
        &self,
        guild_id: u64,
        user_id: u64,
        delete_message_days: u8,
        reason: &str,
    ) -> Result<(), AppError> {
        self.record(ApiCall::Ban {
            guild_id,
            user_id,
            delete_message_days,
            reason: reason.to_string(),
        });
        self.outcome()
    }

    async fn purge(&self, channel_id: u64, limit: u8) -> Result<usize, AppError> {
        self.record(ApiCall::Purge { channel_id, limit });
        if self.forbidden {
            return Err(AppError::Forbidden);
        }

        let deleted = self.channel_messages.min(usize::from(limit));
        self.deleted.fetch_add(deleted, Ordering::SeqCst);
        Ok(deleted)
    }

    async fn create_poll(
        &self,
        channel_id: u64,
        content: &str,
        poll: &PollDraft,
    ) -> Result<(), AppError> {
        self.record(ApiCall::CreatePoll {
            channel_id,
            content: content.to_string(),
            poll: poll.clone(),
        });
        self.outcome()
    }
}
