use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Member, Message, Ready};
use serenity::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

pub mod guild;
pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Signalled on every `ready` so background tasks can wait for the gateway session.
    pub ready: Arc<Notify>,
}

impl Handler {
    pub fn new(db: DatabaseConnection, ready: Arc<Notify>) -> Self {
        Self { db, ready }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, ctx, message).await;
    }
}
