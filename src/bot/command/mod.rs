//! Slash and prefix commands.
//!
//! Commands stay thin: they resolve the guild, call a service, and send the single reply.
//! Errors bubble up to the framework's `on_error`, which sends the ephemeral error text.

mod moderation;
mod owner;
mod poll;
mod settings;
mod user_info;
mod utility;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    error::AppError,
    i18n::Translator,
    model::{guild_config::Language, reply::CommandReply},
    service::discord::SerenityDiscordApi,
};

/// Shared state available to every command.
pub struct Data {
    pub db: DatabaseConnection,
    pub translator: Arc<Translator>,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

pub type Command = poise::Command<Data, AppError>;

/// Lists all the implemented commands
pub fn list() -> Vec<Command> {
    vec![
        settings::settings(),
        moderation::kick(),
        moderation::ban(),
        moderation::warn(),
        moderation::clear(),
        poll::poll(),
        user_info::userinfo(),
        utility::dice(),
        utility::coinflip(),
        owner::sync(),
    ]
}

/// Sends the command's single reply.
async fn send_reply(ctx: Context<'_>, reply: CommandReply) -> Result<(), AppError> {
    ctx.send(
        poise::CreateReply::default()
            .content(reply.content())
            .ephemeral(reply.is_ephemeral()),
    )
    .await?;

    Ok(())
}

/// Guild of the invocation; DMs have no guild language so the error is in English.
fn require_guild(ctx: Context<'_>) -> Result<u64, AppError> {
    ctx.guild_id().map(|id| id.get()).ok_or_else(|| {
        AppError::Validation(
            ctx.data()
                .translator
                .translate(Language::En, "errors.guild_only"),
        )
    })
}

fn discord_api(ctx: Context<'_>) -> SerenityDiscordApi {
    SerenityDiscordApi::new(ctx.serenity_context().http.clone())
}
